use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionDotsProps {
    pub current: usize,
    pub total: usize,
    /// Fired with the clicked section index.
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub labels: Vec<&'static str>,
}

/// Vertical dot indicator for paged layouts.
#[function_component(SectionDots)]
pub fn section_dots(props: &SectionDotsProps) -> Html {
    let dots = (0..props.total).map(|i| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(i);
        });
        let label = props.labels.get(i).copied().unwrap_or_default();
        html! {
            <button
                class={classes!("section-dot", (i == props.current).then(|| "active"))}
                title={label}
                aria-label={format!("Go to section {}", i + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div class="section-dots">
            <style>
                {r#"
                .section-dots {
                    position: fixed;
                    right: 2rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .section-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    padding: 0;
                    border-radius: 999px;
                    border: 1px solid rgba(0, 255, 255, 0.6);
                    background: transparent;
                    cursor: pointer;
                    transition: height 0.3s ease, background 0.3s ease;
                }
                .section-dot.active {
                    height: 1.8rem;
                    background: #00ffff;
                    box-shadow: 0 0 12px rgba(0, 255, 255, 0.8);
                }
                "#}
            </style>
            { for dots }
        </div>
    }
}
