use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::config::colors;
use crate::content::faq::{CategoryFilter, FaqAction, FaqFilter, FAQS};
use crate::Route;

const QUICK_LINKS: [(&str, &str, &str, &str); 3] = [
    ("⚡", "Getting Started", "Learn the basics of setting up your VPS", colors::PURPLE),
    ("🖥", "Server Management", "Tips for managing your server efficiently", colors::LIGHT_BLUE),
    ("🛡", "Security Best Practices", "Keep your server and data secure", colors::VIOLET),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let filter = use_reducer(FaqFilter::default);
    let visible = filter.apply(FAQS);

    let oninput = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.dispatch(FaqAction::Search(input.value()));
        })
    };

    let clear = {
        let filter = filter.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Clearing FAQ filters");
            filter.dispatch(FaqAction::Clear);
        })
    };

    let tabs = CategoryFilter::tabs().map(|tab| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                filter.dispatch(FaqAction::SelectCategory(tab));
            })
        };
        html! {
            <button class={classes!("faq-tab", (filter.category() == tab).then(|| "active"))} {onclick}>
                <span>{tab.icon()}</span>
                <span class="faq-tab-label">{tab.label()}</span>
                <span class="faq-tab-short">{tab.short_label()}</span>
            </button>
        }
    });

    let items = visible.iter().enumerate().map(|(index, entry)| {
        let on_toggle = {
            let filter = filter.clone();
            Callback::from(move |_: ()| filter.dispatch(FaqAction::Toggle(index)))
        };
        html! {
            <FaqItem key={entry.question} entry={**entry} open={filter.is_open(index)} {on_toggle} />
        }
    });

    html! {
        <div class="faq-page">
            <style>
                {r#"
                .faq-page {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 5rem;
                    background: linear-gradient(180deg, #ffffff 0%, #f6f3fb 100%);
                    color: #1E3A5F;
                }
                .faq-hero {
                    text-align: center;
                    max-width: 720px;
                    margin: 0 auto 3rem;
                }
                .faq-hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.5rem);
                    margin-bottom: 1rem;
                }
                .faq-hero p {
                    color: #6b7280;
                }
                .faq-search {
                    width: 100%;
                    max-width: 560px;
                    margin: 2rem auto 0;
                    padding: 1rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid #e5e7eb;
                    font-size: 1rem;
                    box-sizing: border-box;
                    display: block;
                }
                .faq-search:focus {
                    outline: none;
                    border-color: #7B2D8E;
                    box-shadow: 0 0 0 3px rgba(123, 45, 142, 0.15);
                }
                .faq-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 2.5rem;
                }
                .faq-tab {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.6rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid #e5e7eb;
                    background: white;
                    color: #1E3A5F;
                    cursor: pointer;
                }
                .faq-tab.active {
                    background: #7B2D8E;
                    border-color: #7B2D8E;
                    color: white;
                }
                .faq-tab-short {
                    display: none;
                }
                @media (max-width: 640px) {
                    .faq-tab-label { display: none; }
                    .faq-tab-short { display: inline; }
                }
                .faq-list {
                    max-width: 820px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                    overflow: hidden;
                }
                .faq-item.open {
                    border-color: #7B2D8E;
                    box-shadow: 0 12px 32px rgba(123, 45, 142, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border: none;
                    background: none;
                    color: inherit;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                }
                .question-text {
                    flex: 1;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7B2D8E;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.5rem 3.5rem;
                    color: #4b5563;
                    line-height: 1.7;
                }
                .faq-bullets {
                    margin: 0;
                    padding-left: 1.1rem;
                }
                .faq-bullets li {
                    margin-bottom: 0.4rem;
                }
                .faq-empty {
                    text-align: center;
                    padding: 3rem 1rem;
                    color: #6b7280;
                }
                .faq-empty button, .faq-help a {
                    margin-top: 1rem;
                    padding: 0.75rem 1.75rem;
                    border-radius: 999px;
                    border: none;
                    background: #7B2D8E;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    text-decoration: none;
                    display: inline-block;
                }
                .faq-help {
                    max-width: 820px;
                    margin: 5rem auto 0;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    background: linear-gradient(135deg, rgba(123, 45, 142, 0.08), rgba(91, 192, 235, 0.08));
                }
                .faq-help p {
                    color: #6b7280;
                }
                .quick-links {
                    max-width: 1000px;
                    margin: 5rem auto 0;
                }
                .quick-links h2 {
                    text-align: center;
                }
                .quick-links-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .quick-link {
                    display: block;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #e5e7eb;
                    background: white;
                    color: inherit;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .quick-link:hover {
                    transform: translateY(-4px);
                }
                .quick-link p {
                    color: #6b7280;
                }
                .quick-link-more {
                    font-weight: 600;
                }
                "#}
            </style>

            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Plans, servers, billing and support. Find answers fast or ask our team directly."}</p>
                <input
                    class="faq-search"
                    type="search"
                    placeholder="Search questions..."
                    value={filter.query().to_string()}
                    {oninput}
                />
            </section>

            <div class="faq-tabs">
                { for tabs }
            </div>

            <div class="faq-list">
                if visible.is_empty() {
                    <div class="faq-empty">
                        <p>{"No questions match your search."}</p>
                        <button onclick={clear}>{"Clear filters"}</button>
                    </div>
                } else {
                    { for items }
                }
            </div>

            <section class="faq-help">
                <h2>{"Still Have Questions?"}</h2>
                <p>{"Can't find what you're looking for? Our support team is here to help 24/7."}</p>
                <Link<Route> to={Route::Contact}>{"Contact Support"}</Link<Route>>
            </section>

            <section class="quick-links">
                <h2>{"Quick Links"}</h2>
                <div class="quick-links-grid">
                    { for QUICK_LINKS.iter().map(|(icon, title, description, color)| html! {
                        <a class="quick-link" href="#">
                            <span style={format!("color: {}; font-size: 1.75rem;", color)}>{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                            <span class="quick-link-more" style={format!("color: {};", color)}>{"Learn more →"}</span>
                        </a>
                    }) }
                </div>
            </section>
        </div>
    }
}
