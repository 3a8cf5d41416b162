use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::company::HERO_STATS;
use crate::motion::interpolate::active_slice;
use crate::motion::{use_scroll_progress, NeonVisuals};
use crate::Route;

const SCREENS: [(&str, &str, &str); 4] = [
    ("INFRACORE", "Future Cloud", "System online • All nodes nominal"),
    ("DEPLOY", "Launch in milliseconds", "Instant provisioning • Zero configuration • Maximum performance"),
    ("SCALE", "From zero to infinity", "Auto-scaling • Load balancing • Global distribution"),
    ("LAUNCH", "Your core, your rules", "No credit card • Free 30-day trial"),
];

/// Four-screen hero that slides sideways while the page scrolls down.
#[function_component(Neon)]
pub fn neon() -> Html {
    let container = use_node_ref();
    let progress = use_scroll_progress(container.clone());
    let visuals = NeonVisuals::at(progress.smoothed);
    let active = active_slice(progress.raw, SCREENS.len());

    let screens = SCREENS.iter().enumerate().map(|(i, (title, lede, sub))| {
        let last = i + 1 == SCREENS.len();
        html! {
            <section class={classes!("neon-screen", (i == active).then(|| "active"))}>
                <h1 class={classes!("neon-title", (i == 0).then(|| "wordmark"))}>{*title}</h1>
                <p class="neon-lede">{*lede}</p>
                <p class="neon-sub">{*sub}</p>
                if last {
                    <div class="neon-stats">
                        { for HERO_STATS.iter().map(|(value, label, color)| html! {
                            <div class="neon-stat">
                                <span class="neon-stat-value" style={format!("color: {};", color)}>{*value}</span>
                                <span class="neon-stat-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                    <Link<Route> to={Route::Pricing} classes="neon-cta">{"Launch Now"}</Link<Route>>
                }
            </section>
        }
    });

    html! {
        <div class="neon-page" ref={container}>
            <style>
                {r#"
                .neon-page {
                    position: relative;
                    height: 400vh;
                    background: #000;
                    color: white;
                    font-family: monospace;
                }
                .neon-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }
                .neon-grid {
                    position: absolute;
                    inset: -50%;
                    background-image:
                        linear-gradient(rgba(0, 255, 255, 0.08) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 0, 255, 0.08) 1px, transparent 1px);
                    background-size: 60px 60px;
                    pointer-events: none;
                }
                .neon-track {
                    display: flex;
                    width: 400vw;
                    height: 100%;
                    will-change: transform;
                }
                .neon-screen {
                    flex: 0 0 100vw;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    opacity: 0.35;
                    transition: opacity 0.4s ease;
                }
                .neon-screen.active {
                    opacity: 1;
                }
                .neon-title {
                    font-size: clamp(4rem, 14vw, 14rem);
                    font-weight: 900;
                    letter-spacing: -0.04em;
                    margin: 0;
                    color: #00ffff;
                    text-shadow: 0 0 40px rgba(0, 255, 255, 1), 0 0 80px rgba(255, 0, 255, 0.5);
                }
                .neon-title.wordmark {
                    background: linear-gradient(135deg, #00ffff 0%, #0099ff 25%, #ff00ff 50%, #ff0099 75%, #00ffff 100%);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    text-shadow: none;
                }
                .neon-lede {
                    font-size: clamp(1.5rem, 4vw, 3.5rem);
                    font-weight: 300;
                    margin: 0;
                }
                .neon-sub {
                    color: rgba(255, 255, 255, 0.6);
                    letter-spacing: 0.1em;
                    margin: 0;
                }
                .neon-stats {
                    display: flex;
                    gap: 3rem;
                    margin-top: 2rem;
                }
                .neon-stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .neon-stat-value {
                    font-size: clamp(2rem, 5vw, 4rem);
                    font-weight: 900;
                }
                .neon-stat-label {
                    color: rgba(255, 255, 255, 0.7);
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .neon-cta {
                    margin-top: 2rem;
                    padding: 1.25rem 4rem;
                    background: linear-gradient(90deg, #06b6d4, #3b82f6, #d946ef);
                    color: white;
                    font-weight: 900;
                    text-decoration: none;
                    text-transform: uppercase;
                }
                .neon-ring {
                    position: absolute;
                    right: 6vw;
                    bottom: 8vh;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    border: 2px dashed rgba(0, 255, 255, 0.6);
                    pointer-events: none;
                }
                .neon-progress {
                    position: absolute;
                    left: 50%;
                    bottom: 2rem;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.75rem;
                }
                .neon-progress span {
                    width: 2rem;
                    height: 3px;
                    background: rgba(255, 255, 255, 0.2);
                    transition: background 0.3s ease;
                }
                .neon-progress span.active {
                    background: #00ffff;
                    box-shadow: 0 0 10px #00ffff;
                }
                "#}
            </style>
            <div class="neon-sticky">
                <div class="neon-grid" style={visuals.filter_style()}></div>
                <div class="neon-track" style={visuals.track_style()}>
                    { for screens }
                </div>
                <div class="neon-ring" style={format!("transform: rotate({:.1}deg);", visuals.camera_deg)}></div>
                <div class="neon-progress">
                    { for (0..SCREENS.len()).map(|i| html! {
                        <span class={classes!((i == active).then(|| "active"))}></span>
                    }) }
                </div>
            </div>
        </div>
    }
}
