//! Networking modules for the location search endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the JSON schema the
//! server's `/location` route returns.

pub mod api;
pub mod types;
