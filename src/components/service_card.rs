use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::services::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state(|| false);
    let service = &props.service;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={classes!("service-card", (*hovered).then(|| "hovered"))}
            style={format!("--accent: {};", service.accent)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="service-image">
                <img src={service.image} alt={service.subtitle} />
                <span class="service-number">{format!("{:02}", props.index + 1)}</span>
            </div>
            <div class="service-body">
                <span class="service-icon">{service.icon}</span>
                <p class="service-title">{service.title}</p>
                <h3 class="service-subtitle">{service.subtitle}</h3>
                if *hovered {
                    <p class="service-description">{service.description}</p>
                }
            </div>
        </div>
    }
}
