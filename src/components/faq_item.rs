use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::faq::{FaqAnswer, FaqEntry};

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: FaqEntry,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

fn render_answer(answer: &FaqAnswer) -> Html {
    match answer {
        FaqAnswer::Text(text) => html! { <p>{*text}</p> },
        FaqAnswer::Bullets(bullets) => html! {
            <ul class="faq-bullets">
                { for bullets.iter().map(|bullet| html! {
                    <li>
                        if let Some(label) = bullet.label {
                            <strong>{format!("{}: ", label)}</strong>
                        }
                        {bullet.text}
                    </li>
                }) }
            </ul>
        },
    }
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };
    let category = props.entry.category;

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="faq-category-icon" style={format!("color: {};", category.color())}>
                    {category.icon()}
                </span>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { render_answer(&props.entry.answer) }
                </div>
            }
        </div>
    }
}
