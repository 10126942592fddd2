//! # chakra-profile
//!
//! Personality and spiritual profile generation from seven energy-center
//! readings.
//!
//! - [`profile`] derives a [`GeneratedProfile`] from [`EnergyCenterReadings`]
//! - [`questionnaire`] turns questionnaire answers into readings or practice
//!   recommendations
//! - [`storage`] persists generated profiles per session
//! - [`server`] exposes everything over HTTP

pub mod profile;
pub mod questionnaire;
pub mod server;
pub mod storage;
pub mod utilities;

pub use profile::{
    derive, EnergyCenter, EnergyCenterReading, EnergyCenterReadings, GeneratedProfile,
    OverallLevel, ProfileError,
};
pub use storage::{open_store, MemoryStore, ProfileRecord, ProfileStore, SessionRecord, SqliteStore};

/// API version reported by `/health` and `/api/`.
pub const VERSION: &str = "1.0.0";
