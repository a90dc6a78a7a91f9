//! Autocomplete wiring for the server-rendered location form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships `#location-form` with a text input, a `<datalist>` of
//! suggestions, a reset button, hidden `latitude`/`longitude` inputs and a
//! submit button. This module binds listeners to that markup and keeps it in
//! step with `LocationSearchState`. Pages without the form are left alone.

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, HtmlInputElement, HtmlOptionElement};

#[cfg(feature = "hydrate")]
use crate::net::api::search_locations;
#[cfg(feature = "hydrate")]
use crate::state::location::{InputKind, LocationOption, LocationSearchState};

pub const FORM_ID: &str = "location-form";

/// Bind the autocomplete listeners if the page has a location form.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        let Some(form) = LocationForm::find() else {
            log::debug!("location form: #{FORM_ID} not found, skipping");
            return;
        };
        form.bind();
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct LocationForm {
    input: HtmlInputElement,
    list: Element,
    reset: Element,
    submit: Option<Element>,
    latitude: HtmlInputElement,
    longitude: HtmlInputElement,
}

#[cfg(feature = "hydrate")]
fn hidden_input(form: &Element, name: &str) -> Option<HtmlInputElement> {
    form.query_selector(&format!("input[type='hidden'][name='{name}']"))
        .ok()??
        .dyn_into::<HtmlInputElement>()
        .ok()
}

#[cfg(feature = "hydrate")]
impl LocationForm {
    fn find() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let form = document.get_element_by_id(FORM_ID)?;
        Some(Self {
            input: form
                .query_selector("#location-input")
                .ok()??
                .dyn_into::<HtmlInputElement>()
                .ok()?,
            list: form.query_selector("#locations-list").ok()??,
            reset: form.query_selector("#location-reset").ok()??,
            submit: form.query_selector("button[type='submit']").ok().flatten(),
            latitude: hidden_input(&form, "latitude")?,
            longitude: hidden_input(&form, "longitude")?,
        })
    }

    /// Mirror the selected coordinates into the hidden inputs and submit button.
    fn sync_selection(&self, state: &LocationSearchState) {
        if let Some(coords) = state.selection() {
            self.latitude.set_value(&coords.latitude.to_string());
            self.longitude.set_value(&coords.longitude.to_string());
            if let Some(submit) = &self.submit {
                let _ = submit.remove_attribute("disabled");
            }
        } else {
            self.latitude.set_value("");
            self.longitude.set_value("");
            if let Some(submit) = &self.submit {
                let _ = submit.set_attribute("disabled", "true");
            }
        }
    }

    fn render_options(&self, options: &[LocationOption]) {
        self.list.set_inner_html("");
        if options.is_empty() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let fragment = document.create_document_fragment();
        for option in options {
            let Some(el) = document
                .create_element("option")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
            else {
                continue;
            };
            el.set_value(&option.label);
            let data = el.dataset();
            let _ = data.set("latitude", &option.latitude.to_string());
            let _ = data.set("longitude", &option.longitude.to_string());
            let _ = fragment.append_child(&el);
        }
        let _ = self.list.append_child(&fragment);
    }

    fn bind(self) {
        let state = Rc::new(RefCell::new(LocationSearchState::new()));

        {
            let form = self.clone();
            let state = Rc::clone(&state);
            let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                let mut state = state.borrow_mut();
                state.reset();
                form.input.set_value(state.query());
                form.sync_selection(&state);
                let _ = form.input.focus();
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = self
                .reset
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
            cb.forget();
        }

        {
            let form = self.clone();
            let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                let value = form.input.value();
                let input_type = ev
                    .dyn_ref::<web_sys::InputEvent>()
                    .map(web_sys::InputEvent::input_type);
                let kind = InputKind::from_input_type(input_type.as_deref());

                let seq = {
                    let mut state = state.borrow_mut();
                    state.on_input(&value, kind);
                    form.sync_selection(&state);
                    state.begin_search()
                };

                let form = form.clone();
                let state = Rc::clone(&state);
                wasm_bindgen_futures::spawn_local(async move {
                    let response = search_locations(&value).await;
                    let mut state = state.borrow_mut();
                    if state.apply_results(seq, &response) {
                        form.render_options(state.options());
                    }
                });
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = self
                .input
                .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref());
            cb.forget();
        }
    }
}
