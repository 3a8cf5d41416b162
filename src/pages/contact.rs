use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::company::{CONTACT_CHANNELS, SUPPORT_HOURS};
use crate::Route;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    background: linear-gradient(180deg, #ffffff 0%, #f6f3fb 100%);
                    color: #1E3A5F;
                }
                .contact-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .contact-hero {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .contact-hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    margin-bottom: 1rem;
                }
                .contact-hero p {
                    color: #6b7280;
                }
                .contact-channels {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .contact-channel {
                    padding: 2rem;
                    border-radius: 1.25rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                }
                .contact-channel-icon {
                    font-size: 1.75rem;
                }
                .contact-channel-label {
                    color: #9ca3af;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin: 1rem 0 0.25rem;
                }
                .contact-channel-value, .contact-channel a {
                    font-size: 1.15rem;
                    font-weight: 600;
                    color: #1E3A5F;
                    text-decoration: none;
                    margin: 0;
                }
                .contact-channel-detail {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .contact-lower {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .contact-lower {
                        grid-template-columns: 1fr;
                    }
                }
                .contact-panel {
                    padding: 2rem;
                    border-radius: 1.25rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                }
                .hours-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.85rem 0;
                    border-bottom: 1px solid #f3f4f6;
                }
                .hours-row span:last-child {
                    color: #6b7280;
                }
                .emergency {
                    margin-top: 1.5rem;
                    padding: 1rem 1.25rem;
                    border-radius: 0.75rem;
                    background: rgba(123, 45, 142, 0.06);
                }
                .emergency p {
                    margin: 0.25rem 0;
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .contact-cta {
                    margin-top: 4rem;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #1E3A5F, #7B2D8E);
                    color: white;
                }
                .contact-cta p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .contact-cta a {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: white;
                    color: #1E3A5F;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
            <div class="contact-inner">
                <section class="contact-hero">
                    <h1>{"Get in Touch"}</h1>
                    <p>{"Questions about a plan, a migration or an invoice? Reach the team that runs the servers."}</p>
                </section>

                <div class="contact-channels">
                    { for CONTACT_CHANNELS.iter().map(|channel| html! {
                        <div class="contact-channel">
                            <span class="contact-channel-icon">{channel.icon}</span>
                            <p class="contact-channel-label">{channel.label}</p>
                            if let Some(href) = channel.href {
                                <a href={href}>{channel.value}</a>
                            } else {
                                <p class="contact-channel-value">{channel.value}</p>
                            }
                            if let Some(detail) = channel.detail {
                                <p class="contact-channel-detail">{detail}</p>
                            }
                        </div>
                    }) }
                </div>

                <div class="contact-lower">
                    <div class="contact-panel">
                        <h2>{"Support Hours"}</h2>
                        { for SUPPORT_HOURS.iter().map(|(day, hours)| html! {
                            <div class="hours-row">
                                <span>{*day}</span>
                                <span>{*hours}</span>
                            </div>
                        }) }
                        <div class="emergency">
                            <p><strong>{"Emergency Support"}</strong></p>
                            <p>{"For critical issues outside business hours, our emergency support team is available 24/7."}</p>
                        </div>
                    </div>
                    <div class="contact-panel">
                        <h2>{"Global Support"}</h2>
                        <p>{"Available in 15+ languages"}</p>
                        <p>{"Tickets are answered by engineers, not scripts. Most replies land within fifteen minutes."}</p>
                    </div>
                </div>

                <section class="contact-cta">
                    <h2>{"Ready to Get Started?"}</h2>
                    <p>{"Explore our hosting plans and find the perfect solution for your needs"}</p>
                    <Link<Route> to={Route::Pricing}>{"View Plans"}</Link<Route>>
                </section>
            </div>
        </div>
    }
}
