//! Light/dark theme switch.
//!
//! Renders a visually hidden checkbox, its label, a focusable track and the
//! prompt text. Clicks, Space/Enter on the track and platform color-scheme
//! changes all become a `ThemeEvent` dispatched to one `ThemeController`.

#[cfg(test)]
#[path = "theme_switch_test.rs"]
mod theme_switch_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeController, ThemeEvent, ThemeLabels};
use crate::util::color_scheme;
use crate::util::document_root::DocumentRoot;
use crate::util::preference_store::BrowserStore;

/// Default `id` of the hidden checkbox.
pub const DEFAULT_INPUT_ID: &str = "theme-switch";

const TOGGLE_STYLES: &str = r#"
input[type="checkbox"] {
  height: 0;
  width: 0;
  visibility: hidden;
  position: absolute;
}

label {
  --module-width: 36px;
  --module-height: 20px;
  --module-border: 2px;
  --color-bg: var(--color-bg-light, #444);
  --color-action: var(--color-action-light, #AAF);

  cursor: pointer;
  display: flex;
  flex-direction: row;
  align-items: center;
  gap: calc(1rem / 2);
  user-select: none;
  font-size: 80%;
  flex-wrap: wrap;
}

input[type="checkbox"]:checked + label {
  --color-bg: var(--color-bg-dark, #ccc);
  --color-action: var(--color-action-dark, #44F);
}

.control {
  display: block;
  position: relative;
  width: var(--module-width);
  height: var(--module-height);
  background: var(--color-bg);
  border-radius: var(--module-height);
  outline-offset: 0;
  transition: outline-offset .2s;
}

.control:focus {
  outline: var(--module-border) solid var(--color-action);
  outline-offset: var(--module-border);
}

.control::after {
  --control-dimension: calc(var(--module-height) - (var(--module-border) * 2));

  content: '';
  position: absolute;
  top: var(--module-border);
  left: var(--module-border);
  width: var(--control-dimension);
  height: var(--control-dimension);
  background: var(--color-action);
  border-radius: var(--control-dimension);
  transition: 0.2s;
}

input[type="checkbox"]:checked + label span.control::after {
  left: calc(var(--module-width) - var(--module-border));
  transform: translateX(-100%);
}

label:active span.control::after {
  width: calc(var(--module-height) + var(--module-border));
}
"#;

/// Map a keydown on the focused track to the event a click would produce.
pub fn key_event(key: &str) -> Option<ThemeEvent> {
    matches!(key, " " | "Enter").then_some(ThemeEvent::Activate)
}

/// Theme switch bound to `localStorage`, the `<html>` element and the
/// platform color-scheme query.
///
/// `light` and `dark` override the "switch to light" and "switch to dark"
/// prompts.
#[component]
pub fn ThemeSwitch(
    #[prop(optional_no_strip)] light: Option<String>,
    #[prop(optional_no_strip)] dark: Option<String>,
    #[prop(default = DEFAULT_INPUT_ID.to_owned(), into)] input_id: String,
) -> impl IntoView {
    let labels = ThemeLabels::resolve(light, dark);
    let switch = RwSignal::new(ThemeController::mount(
        labels,
        BrowserStore,
        DocumentRoot,
        color_scheme::prefers_dark(),
    ));

    let dispatch = move |event: ThemeEvent| {
        let _ = switch.try_update(|c| c.dispatch(event));
    };

    color_scheme::watch(move |prefers_dark| {
        dispatch(ThemeEvent::PlatformChange { prefers_dark });
    });

    let checked = move || switch.with(|c| c.checked());
    let prompt = move || switch.with(|c| c.prompt().to_owned());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(event) = key_event(&ev.key()) {
            ev.prevent_default();
            dispatch(event);
        }
    };

    view! {
        <input
            type="checkbox"
            id=input_id.clone()
            prop:checked=checked
            on:change=move |_| dispatch(ThemeEvent::Activate)
        />
        <label for=input_id>
            <span
                class="control"
                tabindex="0"
                role="switch"
                aria-checked=move || checked().to_string()
                on:keydown=on_keydown
            ></span>
            <span class="text">{prompt}</span>
        </label>
        <style>{TOGGLE_STYLES}</style>
    }
}
