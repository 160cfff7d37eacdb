//! Networking modules for the sightings REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` defines their failure type, and
//! `types` defines the JSON schema shared with the API.

pub mod api;
pub mod error;
pub mod types;
