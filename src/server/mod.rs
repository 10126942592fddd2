//! HTTP server for profile generation.
//!
//! Exposes the profile derivation, session history and questionnaire
//! helpers as a JSON API. See [`routes`] for the endpoint list.

pub mod routes;

pub use routes::{app_router, AppState};
