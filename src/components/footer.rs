use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{colors, BRAND_NAME};
use crate::content::company::{
    ADDRESS, CITY, EMAIL, FOOTER_NAV, LEGAL_LINKS, PHONE, SOCIAL_LINKS,
};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #f8f7fb;
                    padding: 5rem 1.5rem 2rem;
                    color: #1E3A5F;
                }
                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .footer-cta {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    padding: 2.5rem;
                    margin-bottom: 4rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, #1E3A5F, #7B2D8E);
                    color: white;
                }
                .footer-cta h3 {
                    font-size: 1.75rem;
                    margin: 0;
                }
                .footer-cta p {
                    color: rgba(255, 255, 255, 0.6);
                    margin: 0.5rem 0 0;
                }
                .footer-cta-button {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    background: white;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .footer-cta-button:hover {
                    transform: scale(1.05);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                .footer-brand p {
                    color: #6b7280;
                    line-height: 1.6;
                }
                .footer-logo {
                    font-size: 1.5rem;
                    font-weight: 800;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                }
                .footer-column h4 {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .footer-column li {
                    margin-bottom: 0.75rem;
                }
                .footer-column a {
                    color: #6b7280;
                    text-decoration: none;
                }
                .footer-column a:hover {
                    color: #7B2D8E;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid #e5e7eb;
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                .footer-bottom a {
                    color: #9ca3af;
                    margin-left: 1.5rem;
                    text-decoration: none;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .footer-social a {
                    padding: 0.4rem 0.8rem;
                    border-radius: 999px;
                    border: 1px solid #e5e7eb;
                    font-size: 0.8rem;
                    color: #6b7280;
                    text-decoration: none;
                }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-cta">
                    <div>
                        <h3>{"Ready to get started?"}</h3>
                        <p>{format!("Join thousands of developers building on {}", BRAND_NAME)}</p>
                    </div>
                    <Link<Route> to={Route::Pricing} classes="footer-cta-button">
                        <span style={format!("color: {};", colors::NAVY)}>{"View Plans →"}</span>
                    </Link<Route>>
                </div>

                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <span style={format!("color: {};", colors::PURPLE)}>{BRAND_NAME.to_uppercase()}</span>
                        </Link<Route>>
                        <p>{"Enterprise-grade VPS and cloud hosting with NVMe storage, DDoS protection and engineers on call around the clock."}</p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <a href={*href} aria-label={*name}>{*name}</a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>{"Navigation"}</h4>
                        <ul>
                            { for FOOTER_NAV.iter().map(|link| html! {
                                <li>
                                    <Link<Route> to={link.route}>{link.name}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li><a href={format!("mailto:{}", EMAIL)}>{EMAIL}</a></li>
                            <li><a href={format!("tel:{}", PHONE)}>{PHONE}</a></li>
                            <li>{ADDRESS}</li>
                            <li>{CITY}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{format!("© 2026 {}. All rights reserved.", BRAND_NAME)}</span>
                    <span>
                        { for LEGAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href}>{*name}</a>
                        }) }
                    </span>
                </div>
            </div>
        </footer>
    }
}
