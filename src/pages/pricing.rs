use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::config::colors;
use crate::content::plans::PlanCategory;
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let active = use_state(PlanCategory::default);

    let tabs = PlanCategory::ALL.iter().map(|category| {
        let category = *category;
        let onclick = {
            let active = active.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                debug!("Pricing tab {}", category.label());
                active.set(category);
            })
        };
        html! {
            <button class={classes!("pricing-tab", (*active == category).then(|| "active"))} {onclick}>
                <span class="tab-icon">{category.icon()}</span>
                {category.label()}
            </button>
        }
    });

    html! {
        <div class="pricing-page">
            <style>
                {r#"
                .pricing-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    background: linear-gradient(180deg, #ffffff 0%, #f6f3fb 100%);
                    color: #1E3A5F;
                }
                .pricing-hero {
                    text-align: center;
                    max-width: 760px;
                    margin: 0 auto 3rem;
                }
                .pricing-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(123, 45, 142, 0.2);
                    background: rgba(123, 45, 142, 0.06);
                    color: #7B2D8E;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .pricing-hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    margin: 1.25rem 0 1rem;
                }
                .pricing-hero h1 span {
                    background: linear-gradient(135deg, #7B2D8E, #5BC0EB);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .pricing-hero p {
                    color: #6b7280;
                    font-size: 1.1rem;
                }
                .pricing-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 3rem;
                }
                .pricing-tab {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid #e5e7eb;
                    background: white;
                    color: #1E3A5F;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .pricing-tab.active {
                    background: #7B2D8E;
                    border-color: #7B2D8E;
                    color: white;
                    box-shadow: 0 8px 24px rgba(123, 45, 142, 0.25);
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                    transition: transform 0.25s ease, box-shadow 0.25s ease;
                }
                .pricing-card:hover {
                    transform: translateY(-6px);
                    box-shadow: 0 20px 40px rgba(30, 58, 95, 0.1);
                }
                .pricing-card.popular {
                    border: 2px solid var(--accent);
                    box-shadow: 0 20px 40px rgba(123, 45, 142, 0.15);
                }
                .popular-badge {
                    position: absolute;
                    top: -0.8rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.3rem 1rem;
                    border-radius: 999px;
                    background: var(--accent);
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    white-space: nowrap;
                }
                .plan-name {
                    margin: 0 0 0.5rem;
                    font-size: 1.35rem;
                }
                .plan-description {
                    color: #6b7280;
                    font-size: 0.9rem;
                    min-height: 3rem;
                }
                .plan-price {
                    margin: 1rem 0 1.5rem;
                }
                .plan-amount {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: var(--accent);
                }
                .plan-suffix {
                    color: #9ca3af;
                    margin-left: 0.25rem;
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex: 1;
                }
                .plan-features li {
                    display: flex;
                    gap: 0.6rem;
                    margin-bottom: 0.7rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .plan-features .check {
                    color: var(--accent);
                    font-weight: 700;
                }
                .plan-cta {
                    display: block;
                    padding: 0.9rem;
                    border-radius: 999px;
                    text-align: center;
                    font-weight: 600;
                    text-decoration: none;
                    border: 1px solid var(--accent);
                    color: var(--accent);
                }
                .pricing-card.popular .plan-cta {
                    background: var(--accent);
                    color: white;
                }
                .custom-solution {
                    max-width: 900px;
                    margin: 5rem auto 0;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    background: linear-gradient(135deg, #1E3A5F, #7B2D8E);
                    color: white;
                }
                .custom-solution p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .custom-solution a {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    background: white;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
            <section class="pricing-hero">
                <span class="pricing-badge">{"Flexible Pricing"}</span>
                <h1>{"Choose Your Perfect "}<span>{"Plan"}</span></h1>
                <p>{"Transparent pricing for VPS, cloud and add-ons. No hidden fees, upgrade or downgrade whenever you need."}</p>
            </section>

            <div class="pricing-tabs">
                { for tabs }
            </div>

            <div class="pricing-grid">
                { for active.plans().iter().map(|plan| html! {
                    <PricingCard key={plan.name} plan={*plan} />
                }) }
            </div>

            <section class="custom-solution">
                <h2>{"Need a Custom Solution?"}</h2>
                <p>{"Contact our sales team for a tailored plan that fits your specific requirements"}</p>
                <Link<Route> to={Route::Contact}>
                    <span style={format!("color: {};", colors::NAVY)}>{"Contact Sales"}</span>
                </Link<Route>>
            </section>
        </div>
    }
}
