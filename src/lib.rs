//! # velo-ui
//!
//! Leptos + WASM widgets for the server-rendered weather pages.
//!
//! The page ships plain HTML; loading this crate mounts a `ThemeSwitch` into
//! every `<theme-switch>` host and wires the location search form, the
//! pull-to-refresh gesture and the current-hour table scroll onto whatever
//! markup is present. State lives in `state`, browser glue in `util`, HTTP
//! in `net`.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Host element tag the theme switch mounts into.
pub const THEME_SWITCH_TAG: &str = "theme-switch";

/// Browser entry point, run once the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    mount_theme_switches();
    util::location_form::install();
    util::pull_to_refresh::install();
    util::hour_scroll::install();
}

/// Mount one switch per host, reading its optional `light`/`dark` labels.
#[cfg(feature = "hydrate")]
fn mount_theme_switches() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::theme_switch::{DEFAULT_INPUT_ID, ThemeSwitch};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(hosts) = document.query_selector_all(THEME_SWITCH_TAG) else {
        return;
    };
    for i in 0..hosts.length() {
        let Some(host) = hosts
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let light = host.get_attribute("light");
        let dark = host.get_attribute("dark");
        let input_id = if i == 0 {
            DEFAULT_INPUT_ID.to_owned()
        } else {
            format!("{DEFAULT_INPUT_ID}-{i}")
        };
        leptos::mount::mount_to(host, move || {
            view! { <ThemeSwitch light=light dark=dark input_id=input_id/> }
        })
        .forget();
    }
    log::debug!("theme switch: mounted {} instance(s)", hosts.length());
}
