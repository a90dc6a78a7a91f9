//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split per widget (`theme`, `location`, `swipe`) and kept free of
//! `web-sys` so transitions can be tested natively.

pub mod location;
pub mod swipe;
pub mod theme;
