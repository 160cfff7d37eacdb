//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render route guards, navigation, and the sighting table/form
//! while reading/writing shared state from Leptos context providers.

pub mod guards;
pub mod nav_bar;
pub mod sighting_form;
pub mod sighting_row;
