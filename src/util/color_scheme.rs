//! Platform color-scheme signal (`prefers-color-scheme: dark`).
//!
//! TRADE-OFFS
//! ==========
//! The change listener is subscribed once and never removed; it lives as
//! long as the page.

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "hydrate")]
fn dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Current platform preference, `None` when it cannot be queried.
pub fn prefers_dark() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        dark_query().map(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Call `on_change` with the new preference whenever the platform flips.
pub fn watch(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(mq) = dark_query() else {
            log::debug!("color scheme: media query unavailable, not watching");
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        mq.set_onchange(Some(cb.as_ref().unchecked_ref()));
        cb.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
