use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{window, Element, Event, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::use_window_size;

use super::gallery::Viewport;
use super::gestures::{PageController, Routed, ScrollEdges, SectionKind, TouchTracker};
use super::listener::attach_all;

/// Snapshot of the pager handed to the page for rendering.
#[derive(Clone, PartialEq)]
pub struct PagerHandle {
    pub current: usize,
    pub total: usize,
    pub gallery_offset: f64,
    /// True while a section transition holds the animation lock.
    pub transitioning: bool,
    pub go_to: Callback<usize>,
}

fn probe_edges(scrollers: &[Option<NodeRef>], index: usize) -> Option<ScrollEdges> {
    let element = scrollers.get(index)?.as_ref()?.cast::<Element>()?;
    Some(ScrollEdges::from_metrics(
        element.scroll_top() as f64,
        element.scroll_height() as f64,
        element.client_height() as f64,
    ))
}

/// Full-viewport section paging driven by wheel, keyboard and touch.
///
/// `scrollers` is indexed by section; `Some` entries point at the inner
/// scroller of a [`SectionKind::Nested`] section.
#[hook]
pub fn use_section_pager(sections: Vec<SectionKind>, scrollers: Vec<Option<NodeRef>>) -> PagerHandle {
    let (width, _) = use_window_size();
    let controller = use_mut_ref(|| PageController::new(sections, Viewport::from_width(width)));
    let touch = use_mut_ref(TouchTracker::default);
    let release = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |width| {
                controller.borrow_mut().set_viewport(Viewport::from_width(*width));
                || ()
            },
            width,
        );
    }

    let on_routed: Rc<dyn Fn(Routed)> = {
        let controller = controller.clone();
        let release = release.clone();
        let update = update.clone();
        Rc::new(move |routed: Routed| {
            if let Routed::Section(index) = routed {
                debug!("paged to section {}", index);
                let remaining = controller
                    .borrow()
                    .locked_until()
                    .map_or(0.0, |until| (until - Date::now()).max(0.0));
                let controller = controller.clone();
                let update = update.clone();
                // Re-render once the lock lapses so the transitioning flag clears.
                // Replacing the handle cancels the timer of the previous move.
                *release.borrow_mut() = Some(Timeout::new(remaining.ceil() as u32 + 1, move || {
                    controller.borrow_mut().release(Date::now());
                    update.force_update();
                }));
            }
            if routed.changed() {
                update.force_update();
            }
        })
    };

    {
        let controller = controller.clone();
        let on_routed = on_routed.clone();
        let release = release.clone();
        use_effect_with_deps(
            move |_| {
                let guards = match window() {
                    Some(window) => attach_all(window.as_ref(), handlers(controller, touch, scrollers, on_routed)),
                    None => {
                        warn!("no window, section paging disabled");
                        Vec::new()
                    }
                };
                move || {
                    drop(guards);
                    release.borrow_mut().take();
                }
            },
            (),
        );
    }

    let go_to = {
        let controller = controller.clone();
        Callback::from(move |index: usize| {
            let routed = controller.borrow_mut().go_to(index, Date::now());
            on_routed(routed);
        })
    };

    let snapshot = controller.borrow();
    PagerHandle {
        current: snapshot.current(),
        total: snapshot.total(),
        gallery_offset: snapshot.gallery_offset(),
        transitioning: snapshot.is_locked(Date::now()),
        go_to,
    }
}

fn handlers(
    controller: Rc<RefCell<PageController>>,
    touch: Rc<RefCell<TouchTracker>>,
    scrollers: Vec<Option<NodeRef>>,
    on_routed: Rc<dyn Fn(Routed)>,
) -> Vec<(&'static str, Box<dyn FnMut(Event)>)> {
    let scrollers = Rc::new(scrollers);

    let wheel = {
        let controller = controller.clone();
        let scrollers = scrollers.clone();
        let on_routed = on_routed.clone();
        Box::new(move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let routed = {
                let mut ctl = controller.borrow_mut();
                let edges = probe_edges(&scrollers, ctl.current());
                ctl.on_wheel(wheel.delta_x(), wheel.delta_y(), edges, Date::now())
            };
            if routed.consumes_event() {
                event.prevent_default();
            }
            on_routed(routed);
        }) as Box<dyn FnMut(Event)>
    };

    let keydown = {
        let controller = controller.clone();
        let scrollers = scrollers.clone();
        let on_routed = on_routed.clone();
        Box::new(move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                return;
            };
            let routed = {
                let mut ctl = controller.borrow_mut();
                let edges = probe_edges(&scrollers, ctl.current());
                ctl.on_key(&key, edges, Date::now())
            };
            if routed.consumes_event() {
                event.prevent_default();
            }
            on_routed(routed);
        }) as Box<dyn FnMut(Event)>
    };

    let touchstart = {
        let touch = touch.clone();
        Box::new(move |event: Event| {
            if let Some(point) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) {
                touch
                    .borrow_mut()
                    .start(point.client_x() as f64, point.client_y() as f64);
            }
        }) as Box<dyn FnMut(Event)>
    };

    let touchend = Box::new(move |event: Event| {
        let Some(point) = event.dyn_ref::<TouchEvent>().and_then(|e| e.changed_touches().get(0)) else {
            return;
        };
        let Some(swipe) = touch
            .borrow_mut()
            .end(point.client_x() as f64, point.client_y() as f64)
        else {
            return;
        };
        let routed = {
            let mut ctl = controller.borrow_mut();
            let edges = probe_edges(&scrollers, ctl.current());
            ctl.on_swipe(swipe, edges, Date::now())
        };
        // Taps must still synthesize clicks, so only real page moves cancel.
        if routed.changed() {
            event.prevent_default();
        }
        on_routed(routed);
    }) as Box<dyn FnMut(Event)>;

    vec![
        ("wheel", wheel),
        ("keydown", keydown),
        ("touchstart", touchstart),
        ("touchend", touchend),
    ]
}
