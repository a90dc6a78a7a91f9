//! Swipe-down-to-reload on touch devices.
//!
//! Listens for `touchstart`/`touchmove` on the document and feeds a
//! `SwipeTracker`. On reload the `<main>` element gets `is-loading` so the
//! stylesheet can show a spinner while the page reloads.

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::swipe::{SwipeOutcome, SwipeTracker};

pub const LOADING_CLASS: &str = "is-loading";

#[cfg(feature = "hydrate")]
fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn first_touch_y(list: &web_sys::TouchList) -> Option<f64> {
    list.get(0).map(|t| f64::from(t.screen_y()))
}

#[cfg(feature = "hydrate")]
fn reload() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(main) = window.document().and_then(|d| d.query_selector("main").ok().flatten()) {
        let _ = main.class_list().add_1(LOADING_CLASS);
    }
    log::debug!("pull to refresh: reloading");
    let _ = window.location().reload();
}

#[cfg(feature = "hydrate")]
fn listen(
    document: &web_sys::Document,
    event: &str,
    handler: impl FnMut(web_sys::TouchEvent) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::TouchEvent)>);
    let _ = document.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Bind the touch listeners to the current document.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let tracker = Rc::new(RefCell::new(SwipeTracker::new()));

        let start = Rc::clone(&tracker);
        listen(&document, "touchstart", move |ev| {
            if let Some(y) = first_touch_y(&ev.target_touches()) {
                start.borrow_mut().start(y, scroll_y());
            }
        });

        listen(&document, "touchmove", move |ev| {
            let Some(y) = first_touch_y(&ev.changed_touches()) else {
                return;
            };
            if tracker.borrow_mut().moved(y, scroll_y()) == SwipeOutcome::Reload {
                reload();
            }
        });
    }
}
