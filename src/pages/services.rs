use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::service_card::ServiceCard;
use crate::content::services::{SERVICES, SERVICE_STATS};
use crate::motion::{use_scroll_progress, StripVisuals};
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    let strip = use_node_ref();
    let progress = use_scroll_progress(strip.clone());
    let visuals = StripVisuals::at(progress);

    html! {
        <div class="services-page">
            <style>
                {r#"
                .services-page {
                    background: #0b1220;
                    color: white;
                }
                .services-hero {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 1.5rem 4rem;
                    background:
                        radial-gradient(circle at 30% 30%, rgba(123, 45, 142, 0.35), transparent 50%),
                        radial-gradient(circle at 70% 70%, rgba(91, 192, 235, 0.25), transparent 50%);
                }
                .services-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin: 0 0 1rem;
                }
                .services-hero p {
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 640px;
                    font-size: 1.15rem;
                }
                .services-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 0 1.5rem 5rem;
                }
                .services-stat {
                    padding: 2rem 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                    text-align: center;
                }
                .services-stat-icon {
                    font-size: 1.75rem;
                }
                .services-stat-value {
                    font-size: 2rem;
                    font-weight: 800;
                    margin: 0.5rem 0 0.25rem;
                }
                .services-stat-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.85rem;
                    margin: 0;
                }
                .services-strip {
                    position: relative;
                    height: 300vh;
                }
                .services-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }
                .services-sticky h2 {
                    padding: 0 6vw;
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    margin: 0 0 2rem;
                }
                .services-track {
                    display: flex;
                    gap: 2rem;
                    padding-left: 6vw;
                    will-change: transform;
                }
                .service-card {
                    flex: 0 0 min(80vw, 380px);
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: white;
                    color: #1E3A5F;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card.hovered {
                    transform: translateY(-8px);
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                }
                .service-image {
                    position: relative;
                    height: 200px;
                    background: linear-gradient(135deg, var(--accent), #1E3A5F);
                }
                .service-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    mix-blend-mode: overlay;
                }
                .service-number {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    color: white;
                    font-family: monospace;
                    font-size: 0.9rem;
                }
                .service-body {
                    padding: 1.75rem;
                    min-height: 180px;
                }
                .service-icon {
                    font-size: 1.5rem;
                }
                .service-title {
                    margin: 0.75rem 0 0.25rem;
                    color: var(--accent);
                    font-size: 0.85rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .service-subtitle {
                    margin: 0;
                    font-size: 1.5rem;
                }
                .service-description {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    animation: fadeUp 0.3s ease;
                }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(8px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .services-progress {
                    margin: 3rem 6vw 0;
                    height: 3px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    overflow: hidden;
                }
                .services-progress-bar {
                    height: 100%;
                    background: linear-gradient(90deg, #7B2D8E, #5BC0EB);
                    transform-origin: left;
                }
                .services-cta {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }
                .services-cta a {
                    display: inline-block;
                    margin-top: 1.5rem;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: linear-gradient(135deg, #7B2D8E, #5BC0EB);
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>

            <section class="services-hero">
                <h1>{"Everything You Need to Run in Production"}</h1>
                <p>{"VPS plans, cloud infrastructure, security and round-the-clock support, all under one roof."}</p>
            </section>

            <div class="services-stats">
                { for SERVICE_STATS.iter().map(|stat| html! {
                    <div class="services-stat">
                        <span class="services-stat-icon">{stat.icon}</span>
                        <p class="services-stat-value">{stat.value}</p>
                        <p class="services-stat-label">{stat.label}</p>
                    </div>
                }) }
            </div>

            <section class="services-strip" ref={strip}>
                <div class="services-sticky">
                    <h2>{"Our Services"}</h2>
                    <div class="services-track" style={format!("transform: translateX({:.2}%);", visuals.offset_percent)}>
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard key={service.subtitle} service={*service} {index} />
                        }) }
                    </div>
                    <div class="services-progress">
                        <div
                            class="services-progress-bar"
                            style={format!("transform: scaleX({:.3});", visuals.progress_scale)}
                        ></div>
                    </div>
                </div>
            </section>

            <section class="services-cta">
                <h2>{"Find the plan that fits"}</h2>
                <Link<Route> to={Route::Pricing}>{"View Pricing"}</Link<Route>>
            </section>
        </div>
    }
}
