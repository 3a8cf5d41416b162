use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod motion;
mod paging;
mod components {
    pub mod faq_item;
    pub mod footer;
    pub mod navbar;
    pub mod pricing_card;
    pub mod section_dots;
    pub mod service_card;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod neon;
    pub mod not_found;
    pub mod pricing;
    pub mod services;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    about::About,
    contact::Contact,
    faq::Faq,
    home::Home,
    neon::Neon,
    not_found::NotFound,
    pricing::Pricing,
    services::Services,
};


#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/neon")]
    Neon,
    #[at("/about")]
    About,
    #[at("/pricing")]
    Pricing,
    #[at("/services")]
    Services,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Paged and scroll-linked layouts own the whole viewport.
    fn is_fullscreen(&self) -> bool {
        matches!(self, Route::Home)
    }
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Neon => {
            info!("Rendering Neon page");
            html! { <Neon /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Layout)]
fn layout() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            if !route.is_fullscreen() {
                <Footer />
            }
        </>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Layout />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/neon"), Some(Route::Neon));
        assert_eq!(Route::recognize("/faq"), Some(Route::Faq));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }

    #[test]
    fn only_paged_home_hides_the_footer() {
        assert!(Route::Home.is_fullscreen());
        assert!(!Route::Neon.is_fullscreen());
        assert!(!Route::Pricing.is_fullscreen());
    }
}
