//! Browser glue shared by the page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` access from component and state logic.
//! Every browser call is gated on the `hydrate` feature so native builds and
//! tests compile without a DOM.

pub mod color_scheme;
pub mod document_root;
pub mod hour_scroll;
pub mod location_form;
pub mod preference_store;
pub mod pull_to_refresh;
