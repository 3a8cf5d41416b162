use std::rc::Rc;

use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::company::NAV_ITEMS;
use crate::Route;

/// Dropdown state of the top-right navigation button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavMenu {
    open: bool,
    active: usize,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Marks `index` active and closes the menu. Unknown indices are ignored.
    pub fn select(&mut self, index: usize, item_count: usize) -> bool {
        if index >= item_count {
            return false;
        }
        self.active = index;
        self.open = false;
        true
    }

    /// Follows a route change made elsewhere, leaving the dropdown as it is.
    pub fn sync(&mut self, index: usize, item_count: usize) {
        if index < item_count {
            self.active = index;
        }
    }
}

pub enum NavAction {
    Toggle,
    Close,
    Select(usize),
    Sync(usize),
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Toggle => next.toggle(),
            NavAction::Close => next.close(),
            NavAction::Select(index) => {
                next.select(index, NAV_ITEMS.len());
            }
            NavAction::Sync(index) => next.sync(index, NAV_ITEMS.len()),
        }
        Rc::new(next)
    }
}

fn active_for(route: Option<&Route>) -> usize {
    route
        .and_then(|route| NAV_ITEMS.iter().position(|item| item.route == *route))
        .unwrap_or(0)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let menu = use_reducer(|| NavMenu {
        open: false,
        active: active_for(route.as_ref()),
    });

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |route| {
                menu.dispatch(NavAction::Sync(active_for(route.as_ref())));
                || ()
            },
            route,
        );
    }

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(NavAction::Toggle);
        })
    };

    let close = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Close))
    };

    let items = NAV_ITEMS.iter().enumerate().map(|(i, item)| {
        let onclick = {
            let menu = menu.clone();
            let navigator = navigator.clone();
            let target = item.route;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu.dispatch(NavAction::Select(i));
                match &navigator {
                    Some(navigator) => {
                        debug!("Navigating to {:?}", target);
                        navigator.push(&target);
                    }
                    None => warn!("Navbar rendered outside a router"),
                }
            })
        };
        let active = menu.active() == i;
        html! {
            <button
                class={classes!("nav-item", active.then(|| "active"))}
                style={format!("--item-color: {};", item.color)}
                {onclick}
            >
                <span class="nav-item-icon">{item.icon}</span>
                <span class="nav-item-label">{item.label}</span>
                <span class="nav-item-index">{format!("{:02}", i + 1)}</span>
            </button>
        }
    });

    html! {
        <div class="dropdown-nav">
            <style>
                {r#"
                .dropdown-nav {
                    position: fixed;
                    top: 2rem;
                    right: 2rem;
                    z-index: 50;
                }
                .nav-toggle {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    border: 2px solid rgba(0, 255, 255, 0.5);
                    background: linear-gradient(135deg, rgba(0, 255, 255, 0.2), rgba(255, 0, 255, 0.2));
                    backdrop-filter: blur(16px);
                    color: #00ffff;
                    font-size: 1.5rem;
                    font-weight: bold;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .nav-toggle:hover {
                    transform: scale(1.05);
                }
                .nav-toggle.open {
                    box-shadow: 0 0 24px rgba(0, 255, 255, 0.5);
                }
                .nav-backdrop {
                    position: fixed;
                    inset: 0;
                }
                .nav-panel {
                    position: absolute;
                    top: 5rem;
                    right: 0;
                    width: 16rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 255, 255, 0.3);
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(24px);
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    animation: navDrop 0.25s ease-out;
                }
                @keyframes navDrop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .nav-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    width: 100%;
                    padding: 1rem;
                    border: 1px solid transparent;
                    border-radius: 0.75rem;
                    background: transparent;
                    color: white;
                    font-family: monospace;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .nav-item:hover {
                    transform: translateX(4px);
                    background: rgba(255, 255, 255, 0.05);
                }
                .nav-item.active {
                    border-color: rgba(0, 255, 255, 0.4);
                    background: linear-gradient(90deg, rgba(0, 255, 255, 0.2), rgba(255, 0, 255, 0.2));
                }
                .nav-item-icon {
                    color: var(--item-color);
                    font-size: 1.5rem;
                }
                .nav-item-label {
                    flex: 1;
                    text-align: left;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                .nav-item-index {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                }
                "#}
            </style>
            if menu.is_open() {
                <div class="nav-backdrop" onclick={close}></div>
            }
            <button class={classes!("nav-toggle", menu.is_open().then(|| "open"))} onclick={toggle}>
                { if menu.is_open() { "×" } else { "≡" } }
            </button>
            if menu.is_open() {
                <nav class="nav-panel">
                    { for items }
                </nav>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selecting_an_item_closes_the_menu() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.select(3, NAV_ITEMS.len()));
        assert!(!menu.is_open());
        assert_eq!(menu.active(), 3);
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(!menu.select(NAV_ITEMS.len(), NAV_ITEMS.len()));
        assert!(menu.is_open());
        assert_eq!(menu.active(), 0);
    }

    #[test]
    fn active_item_follows_route() {
        assert_eq!(active_for(Some(&Route::Pricing)), 3);
        assert_eq!(active_for(Some(&Route::Contact)), 0);
        assert_eq!(active_for(None), 0);
    }

    #[test]
    fn route_change_elsewhere_moves_the_highlight() {
        let menu = Rc::new(NavMenu::default());
        let menu = menu.reduce(NavAction::Sync(active_for(Some(&Route::Faq))));
        assert_eq!(menu.active(), 4);
        assert!(!menu.is_open());

        let menu = menu.reduce(NavAction::Toggle);
        let menu = menu.reduce(NavAction::Sync(active_for(Some(&Route::Services))));
        assert_eq!(menu.active(), 2);
        assert!(menu.is_open());
    }
}
