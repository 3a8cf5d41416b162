use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{colors, BRAND_NAME};
use crate::content::company::{ABOUT_HIGHLIGHTS, HARDWARE, MILESTONES, REACH, VALUES};
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    let brand = BRAND_NAME.to_uppercase();

    html! {
        <div class="about-page">
            <style>
                {r#"
                .about-page {
                    color: #1E3A5F;
                    background: white;
                }
                .about-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .about-hero {
                    padding-top: 9rem;
                    text-align: center;
                }
                .about-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin: 0 0 1.5rem;
                }
                .about-hero h1 span, .about-origin h2 span {
                    color: #7B2D8E;
                }
                .about-hero p, .about-origin p {
                    color: #4b5563;
                    font-size: 1.1rem;
                    line-height: 1.7;
                }
                .about-kicker {
                    color: #7B2D8E;
                    font-weight: 700;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                }
                .about-stats {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 3rem;
                }
                .about-stat-value {
                    font-size: 2.25rem;
                    font-weight: 800;
                    margin: 0;
                }
                .about-stat-label {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin: 0;
                }
                .about-origin {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 4rem;
                    align-items: center;
                }
                @media (max-width: 860px) {
                    .about-origin {
                        grid-template-columns: 1fr;
                    }
                }
                .about-origin h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                }
                .milestones {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .milestone {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(123, 45, 142, 0.05);
                    border: 1px solid rgba(123, 45, 142, 0.12);
                }
                .about-values h2, .about-hardware h2, .about-reach h2 {
                    text-align: center;
                    font-size: clamp(1.75rem, 3.5vw, 2.5rem);
                }
                .values-grid, .hardware-grid, .reach-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .value-card, .hardware-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                }
                .value-card p {
                    color: #6b7280;
                }
                .value-index {
                    color: #5BC0EB;
                    font-family: monospace;
                }
                .hardware-card p {
                    margin: 0.25rem 0;
                }
                .hardware-card .label {
                    color: #6b7280;
                    font-size: 0.85rem;
                }
                .hardware-card .value {
                    font-weight: 700;
                }
                .about-reach {
                    background: linear-gradient(135deg, #1E3A5F, #7B2D8E);
                    color: white;
                    max-width: none;
                }
                .reach-grid {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                }
                .reach-stat {
                    text-align: center;
                }
                .reach-stat .value {
                    font-size: 2.5rem;
                    font-weight: 800;
                    margin: 0.5rem 0 0.25rem;
                }
                .reach-stat .label {
                    color: rgba(255, 255, 255, 0.5);
                    margin: 0;
                }
                .about-cta {
                    text-align: center;
                }
                .about-cta h2 {
                    font-size: clamp(2rem, 5vw, 3.25rem);
                }
                .about-cta a {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: #7B2D8E;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>

            <section class="about-section about-hero">
                <span class="about-kicker">{"About Us"}</span>
                <h1>{"Hosting That "}<span>{"Just Works"}</span></h1>
                <p>{"Fast servers, honest pricing and engineers who pick up the phone. That's the whole pitch."}</p>
                <div class="about-stats">
                    { for ABOUT_HIGHLIGHTS.iter().map(|stat| html! {
                        <div>
                            <p class="about-stat-value" style={format!("color: {};", colors::NAVY)}>{stat.value}</p>
                            <p class="about-stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section about-origin">
                <div>
                    <span class="about-kicker">{"Our Origin"}</span>
                    <h2>{"Built by Developers,"}<br /><span>{"For Developers"}</span></h2>
                    <p>{"It was 3 AM. Another deployment failed. Another cryptic error message. We realized the problem wasn't our code. It was our hosting."}</p>
                    <p>{"Complex interfaces. Hidden fees. Support tickets that went nowhere. We knew there had to be a better way."}</p>
                    <p>
                        {"So we built "}
                        <strong style={format!("color: {};", colors::PURPLE)}>{brand.clone()}</strong>
                        {". Simple, transparent, and built for the way developers actually work."}
                    </p>
                </div>
                <div class="milestones">
                    { for MILESTONES.iter().map(|stat| html! {
                        <div class="milestone">
                            <p class="about-stat-value" style={format!("color: {};", colors::PURPLE)}>{stat.value}</p>
                            <p class="about-stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section about-values">
                <span class="about-kicker">{"Our Values"}</span>
                <h2>{"Our core principles that guide every decision"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().enumerate().map(|(i, (title, description))| html! {
                        <div class="value-card">
                            <span class="value-index">{format!("{:02}", i + 1)}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section about-hardware">
                <span class="about-kicker">{"Infrastructure"}</span>
                <h2>{"Enterprise-Grade Hardware"}</h2>
                <p>{"Your applications run on cutting-edge hardware in premium data centers. We don't compromise on the foundation."}</p>
                <div class="hardware-grid">
                    { for HARDWARE.iter().map(|(label, value)| html! {
                        <div class="hardware-card">
                            <p class="label">{*label}</p>
                            <p class="value">{*value}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section about-reach">
                <h2>{"Real metrics from real infrastructure"}</h2>
                <div class="reach-grid">
                    { for REACH.iter().map(|stat| html! {
                        <div class="reach-stat">
                            <span>{stat.icon}</span>
                            <p class="value">{stat.value}</p>
                            <p class="label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-section about-cta">
                <h2>{"Ready to Experience the Difference?"}</h2>
                <p>{format!("Join thousands of developers who've made the switch to {}", brand)}</p>
                <Link<Route> to={Route::Pricing}>{"See Plans"}</Link<Route>>
            </section>
        </div>
    }
}
