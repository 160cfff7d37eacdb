//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `form`, etc.) so pages and
//! components depend on small focused models that test without a browser.

pub mod auth;
pub mod form;
pub mod identity;
pub mod session;
pub mod sightings;
