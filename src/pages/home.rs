use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_dots::SectionDots;
use crate::content::company::HERO_STATS;
use crate::content::services::SERVICES;
use crate::paging::{use_section_pager, SectionKind};
use crate::Route;

const SECTION_LABELS: [&str; 5] = ["Core", "Deploy", "Scale", "Services", "Launch"];

const DEPLOY_STEPS: &[(&str, &str)] = &[
    ("Pick a plan", "Standard, Quasar or Turbo. Upgrade any time without migrating."),
    ("Choose your OS", "Ubuntu, Debian, AlmaLinux, Rocky or Windows Server."),
    ("Provision", "Your server boots in under a minute with root access ready."),
    ("Connect", "SSH keys, a web console and an API token from the first second."),
    ("Ship", "Point your domain, deploy your stack and go live."),
];

const SCALE_POINTS: &[(&str, &str)] = &[
    ("Auto-scaling", "Resources follow your traffic, up and back down again."),
    ("Load balancing", "Spread requests across nodes with health checks built in."),
    ("Global distribution", "Datacenters on three continents with anycast routing."),
    ("Private networking", "Isolated VLANs between your servers at no extra cost."),
    ("Snapshots", "Capture a server in seconds before every risky change."),
    ("Live resize", "Add RAM, CPU or NVMe storage without a reinstall."),
];

fn panel_style(current: usize) -> String {
    format!("transform: translateY(-{}vh);", current * 100)
}

fn gallery_style(offset: f64) -> String {
    format!("transform: translateX({:.1}px);", offset)
}

#[function_component(Home)]
pub fn home() -> Html {
    let scale_scroller = use_node_ref();
    let services_scroller = use_node_ref();

    let pager = use_section_pager(
        vec![
            SectionKind::Plain,
            SectionKind::Gallery,
            SectionKind::Nested,
            SectionKind::Nested,
            SectionKind::Plain,
        ],
        vec![
            None,
            None,
            Some(scale_scroller.clone()),
            Some(services_scroller.clone()),
            None,
        ],
    );

    let next = {
        let go_to = pager.go_to.clone();
        let current = pager.current;
        Callback::from(move |_: MouseEvent| go_to.emit(current + 1))
    };

    html! {
        <div class={classes!("paged-home", pager.transitioning.then(|| "transitioning"))}>
            <style>
                {r#"
                .paged-home {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    background: #000;
                    color: white;
                    font-family: monospace;
                }
                .paged-track {
                    height: 100%;
                    transition: transform 0.9s cubic-bezier(0.65, 0, 0.35, 1);
                }
                .paged-section {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background:
                        radial-gradient(circle at 20% 20%, rgba(0, 255, 255, 0.12), transparent 45%),
                        radial-gradient(circle at 80% 80%, rgba(255, 0, 255, 0.12), transparent 45%),
                        #000;
                }
                .paged-home.transitioning .paged-section {
                    pointer-events: none;
                }
                .core-title {
                    font-size: clamp(6rem, 20vw, 18rem);
                    font-weight: 900;
                    line-height: 1;
                    letter-spacing: -0.05em;
                    margin: 0;
                    background: linear-gradient(135deg, #00ffff 0%, #0099ff 25%, #ff00ff 50%, #ff0099 75%, #00ffff 100%);
                    background-size: 200% 200%;
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: coreShift 6s ease-in-out infinite;
                }
                @keyframes coreShift {
                    0%, 100% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                }
                .core-tagline {
                    margin-top: 3rem;
                    text-align: center;
                    color: #67e8f9;
                    font-size: clamp(1.25rem, 3vw, 2.25rem);
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.5);
                    font-family: monospace;
                    cursor: pointer;
                    animation: hintBob 2s ease-in-out infinite;
                }
                @keyframes hintBob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 8px); }
                }
                .section-heading {
                    font-size: clamp(3rem, 10vw, 9rem);
                    font-weight: 900;
                    margin: 0 0 1rem;
                }
                .section-lede {
                    font-size: clamp(1.5rem, 4vw, 3.5rem);
                    font-weight: 300;
                    margin: 0 0 1rem;
                }
                .section-sub {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: clamp(1rem, 2vw, 1.75rem);
                    margin: 0;
                }
                .accent-cyan { color: #00ffff; }
                .accent-magenta { color: #ff00ff; }
                .deploy-layout {
                    width: 100%;
                    padding: 0 6vw;
                }
                .deploy-strip {
                    display: flex;
                    gap: 2rem;
                    margin-top: 3rem;
                    transition: transform 0.15s linear;
                }
                .deploy-card {
                    flex: 0 0 min(80vw, 420px);
                    padding: 2rem;
                    border: 1px solid rgba(0, 255, 255, 0.3);
                    border-radius: 1rem;
                    background: rgba(0, 255, 255, 0.05);
                }
                .deploy-card span {
                    color: #00ffff;
                    font-size: 0.85rem;
                }
                .deploy-card h3 {
                    font-size: 1.75rem;
                    margin: 1rem 0 0.5rem;
                }
                .deploy-card p {
                    color: rgba(255, 255, 255, 0.6);
                }
                .nested-scroller {
                    height: 100vh;
                    width: 100%;
                    overflow-y: auto;
                    padding: 15vh 6vw;
                    box-sizing: border-box;
                }
                .scale-grid, .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .scale-point, .services-tile {
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 0, 255, 0.3);
                    background: rgba(255, 0, 255, 0.05);
                    min-height: 220px;
                }
                .services-tile {
                    border-color: rgba(0, 255, 255, 0.3);
                    background: rgba(0, 255, 255, 0.05);
                }
                .scale-point h3, .services-tile h3 {
                    margin-top: 0;
                }
                .scale-point p, .services-tile p {
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.6;
                }
                .launch-stats {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 4rem;
                    margin-bottom: 4rem;
                }
                .launch-stat {
                    text-align: center;
                }
                .launch-value {
                    font-size: clamp(2.5rem, 6vw, 5rem);
                    font-weight: 900;
                }
                .launch-label {
                    color: rgba(255, 255, 255, 0.7);
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .launch-cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .launch-button {
                    padding: 1.25rem 4rem;
                    background: linear-gradient(90deg, #06b6d4, #3b82f6, #d946ef);
                    color: white;
                    font-size: 1.5rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .launch-button:hover {
                    transform: scale(1.05);
                }
                .launch-note {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                }
                "#}
            </style>

            <div class="paged-track" style={panel_style(pager.current)}>
                <section class="paged-section">
                    <div>
                        <h1 class="core-title">{"INFRACORE"}</h1>
                        <p class="core-tagline">{"Future Cloud"}</p>
                    </div>
                    <button class="scroll-hint" onclick={next}>{"scroll ↓"}</button>
                </section>

                <section class="paged-section">
                    <div class="deploy-layout">
                        <h2 class="section-heading accent-cyan">{"DEPLOY"}</h2>
                        <p class="section-lede">{"Launch in "}<strong class="accent-cyan">{"milliseconds"}</strong></p>
                        <p class="section-sub">{"Instant provisioning • Zero configuration • Maximum performance"}</p>
                        <div class="deploy-strip" style={gallery_style(pager.gallery_offset)}>
                            { for DEPLOY_STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                                <div class="deploy-card">
                                    <span>{format!("STEP {:02}", i + 1)}</span>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="paged-section">
                    <div class="nested-scroller" ref={scale_scroller}>
                        <h2 class="section-heading accent-magenta">{"SCALE"}</h2>
                        <p class="section-lede">
                            {"From "}<strong class="accent-magenta">{"zero"}</strong>{" to "}<strong class="accent-magenta">{"infinity"}</strong>
                        </p>
                        <p class="section-sub">{"Auto-scaling • Load balancing • Global distribution"}</p>
                        <div class="scale-grid">
                            { for SCALE_POINTS.iter().map(|(title, body)| html! {
                                <div class="scale-point">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="paged-section">
                    <div class="nested-scroller" ref={services_scroller}>
                        <h2 class="section-heading accent-cyan">{"SERVICES"}</h2>
                        <p class="section-sub">{"Everything a production workload needs, in one place."}</p>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|service| html! {
                                <div class="services-tile">
                                    <h3>{service.icon}{" "}{service.subtitle}</h3>
                                    <p>{service.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="paged-section">
                    <div>
                        <div class="launch-stats">
                            { for HERO_STATS.iter().map(|(value, label, color)| html! {
                                <div class="launch-stat">
                                    <div class="launch-value" style={format!("color: {};", color)}>{*value}</div>
                                    <div class="launch-label">{*label}</div>
                                </div>
                            }) }
                        </div>
                        <div class="launch-cta">
                            <Link<Route> to={Route::Pricing} classes="launch-button">
                                {"Launch Now"}
                            </Link<Route>>
                            <p class="launch-note">{"No credit card • Free 30-day trial"}</p>
                        </div>
                    </div>
                </section>
            </div>

            <SectionDots
                current={pager.current}
                total={pager.total}
                on_select={pager.go_to.clone()}
                labels={SECTION_LABELS.to_vec()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn panel_moves_one_viewport_per_section() {
        assert_eq!(panel_style(0), "transform: translateY(-0vh);");
        assert_eq!(panel_style(3), "transform: translateY(-300vh);");
    }

    #[test]
    fn gallery_style_follows_offset() {
        assert_eq!(gallery_style(-412.34), "transform: translateX(-412.3px);");
        assert_eq!(gallery_style(0.0), "transform: translateX(0.0px);");
    }
}
