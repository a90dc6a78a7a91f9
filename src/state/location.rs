//! Location search form state.
//!
//! DESIGN
//! ======
//! The form holds a free-text input backed by a `<datalist>` of suggestions
//! and two hidden coordinate fields. Coordinates are only known once the user
//! picks a suggestion; any other edit clears them and disables submit.
//! Search responses are tagged with a sequence number so a slow response for
//! an older query cannot overwrite newer suggestions.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use crate::net::types::LocationResponse;

/// `inputType` browsers report when a datalist suggestion replaces the text.
const REPLACEMENT_INPUT_TYPE: &str = "insertReplacementText";

/// How an `input` event changed the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Regular typing, pasting or deleting.
    Typed,
    /// A suggestion was picked from the list.
    Picked,
}

impl InputKind {
    /// Classify an event by its `inputType`. Some browsers fire a plain
    /// `Event` without one when a suggestion is picked.
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            None | Some("" | REPLACEMENT_INPUT_TYPE) => Self::Picked,
            Some(_) => Self::Typed,
        }
    }
}

/// A suggestion as rendered in the datalist.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationOption {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Coordinates submitted with the form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, Default)]
pub struct LocationSearchState {
    query: String,
    options: Vec<LocationOption>,
    selection: Option<Coordinates>,
    issued: u64,
}

impl LocationSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> &[LocationOption] {
        &self.options
    }

    pub fn selection(&self) -> Option<Coordinates> {
        self.selection
    }

    pub fn submit_enabled(&self) -> bool {
        self.selection.is_some()
    }

    /// Record new input text. Clears the coordinates, then resolves them
    /// again if the edit was a suggestion pick matching a known option.
    pub fn on_input(&mut self, value: &str, kind: InputKind) {
        value.clone_into(&mut self.query);
        self.selection = None;
        if kind == InputKind::Picked {
            self.selection = self
                .options
                .iter()
                .find(|o| o.label == value)
                .map(|o| Coordinates {
                    latitude: o.latitude,
                    longitude: o.longitude,
                });
        }
    }

    /// Clear the input, as the reset button does.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selection = None;
    }

    /// Start a search for the current query and return its sequence number.
    pub fn begin_search(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the suggestions with `response` if it answers the latest
    /// search. Returns `false` for stale responses, which are dropped.
    pub fn apply_results(&mut self, seq: u64, response: &LocationResponse) -> bool {
        if seq != self.issued {
            log::debug!("location search: dropping stale response {seq} (latest {})", self.issued);
            return false;
        }
        self.options = response
            .results
            .iter()
            .map(|r| LocationOption {
                label: r.display_name(),
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect();
        true
    }
}
