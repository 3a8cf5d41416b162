use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A DOM event listener that is removed when the guard is dropped.
///
/// Registered as non-passive so handlers may call `prevent_default` on
/// wheel and touch events.
pub struct ListenerGuard {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach {} listener: {:?}", self.event_type, err);
        }
    }
}

/// Registers every listener or none of them.
pub fn attach_all<I>(target: &EventTarget, handlers: I) -> Vec<ListenerGuard>
where
    I: IntoIterator<Item = (&'static str, Box<dyn FnMut(Event)>)>,
{
    let mut guards = Vec::new();
    for (event_type, handler) in handlers {
        match ListenerGuard::new(target, event_type, handler) {
            Ok(guard) => guards.push(guard),
            Err(err) => {
                warn!("failed to attach {} listener: {:?}", event_type, err);
                // Dropping the guards collected so far detaches them.
                return Vec::new();
            }
        }
    }
    guards
}
