//! Spiritual profile derivation from energy center readings.
//!
//! # Modules
//!
//! - [`center`]: the seven centers and their static text tables
//! - [`readings`]: input readings and boundary validation
//! - [`generator`]: the pure `readings -> profile` derivation
//! - [`metrics`]: averages and strongest centers shown next to a profile

pub mod center;
pub mod generator;
pub mod metrics;
pub mod readings;

use thiserror::Error;

pub use center::EnergyCenter;
pub use generator::{derive, GeneratedProfile, Healing, OverallLevel, Personality, Spiritual};
pub use metrics::{summarize, CenterHealth, ProfileMetrics};
pub use readings::{EnergyCenterReading, EnergyCenterReadings, ValidationIssue};

/// Errors raised by profile derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A required center was absent from the readings.
    #[error("Missing energy center: {center}")]
    MissingCenter { center: EnergyCenter },
}
