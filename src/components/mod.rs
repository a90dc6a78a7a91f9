//! Leptos components mounted into the server-rendered page.

pub mod theme_switch;
