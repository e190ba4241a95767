use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Delay used by charts before re-rendering after a resize
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Listens for window resizes and runs `callback` once they have settled.
///
/// Every resize event restarts the `delay_ms` countdown, so a drag that fires
/// dozens of events per second results in a single call. Returns `None` when
/// there is no `window` (e.g. outside a browser).
///
/// The listener and any pending timeout are removed when the returned value is dropped.
pub fn on_resize_settled<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Replacing the old timeout drops it, which cancels it
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || cb()));
    }))
}
