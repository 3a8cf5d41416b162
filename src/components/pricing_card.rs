use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::plans::Plan;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = &props.plan;
    let accent = format!("--accent: {};", plan.accent);

    html! {
        <div class={classes!("pricing-card", plan.popular.then(|| "popular"))} style={accent}>
            if plan.popular {
                <span class="popular-badge">{"Most Popular"}</span>
            }
            <h3 class="plan-name">{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="plan-amount">{plan.price.amount()}</span>
                if let Some(suffix) = plan.price.suffix() {
                    <span class="plan-suffix">{suffix}</span>
                }
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>
            <Link<Route> to={Route::Contact} classes="plan-cta">
                {"Get Started"}
            </Link<Route>>
        </div>
    }
}
