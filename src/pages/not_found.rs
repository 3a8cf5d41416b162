use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    color: white;
                    font-family: monospace;
                    text-align: center;
                }
                .not-found h1 {
                    font-size: clamp(5rem, 18vw, 12rem);
                    margin: 0;
                    color: #ff00ff;
                    text-shadow: 0 0 40px rgba(255, 0, 255, 0.6);
                }
                .not-found a {
                    margin-top: 2rem;
                    color: #00ffff;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This node is offline."}</p>
            <Link<Route> to={Route::Home}>{"Back to the core"}</Link<Route>>
        </div>
    }
}
