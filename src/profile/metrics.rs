//! Summary metrics shown alongside a generated profile.
//!
//! These are not part of the stored profile. They are recomputed from the
//! readings whenever a profile is returned.

use serde::{Deserialize, Serialize};

use super::center::EnergyCenter;
use super::readings::EnergyCenterReadings;
use super::ProfileError;

/// Number of centers listed in [`ProfileMetrics::strongest_centers`].
pub const STRONGEST_CENTERS: usize = 3;

/// Health of one center: `max(0, frequency + balance - blockage) / 3`, rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CenterHealth {
    pub center: EnergyCenter,
    pub name: String,
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    /// Rounded mean frequency.
    pub overall_frequency: i32,
    /// Rounded mean blockage.
    pub overall_blockage: i32,
    /// `100 - overall_blockage`.
    pub energy_flow: i32,
    /// Healthiest centers first; ties keep canonical order.
    pub strongest_centers: Vec<CenterHealth>,
}

/// Compute summary metrics over all seven centers.
pub fn summarize(readings: &EnergyCenterReadings) -> Result<ProfileMetrics, ProfileError> {
    let mut frequency = 0;
    let mut blockage = 0;
    let mut scored = Vec::with_capacity(EnergyCenter::ALL.len());

    for center in EnergyCenter::ALL {
        let reading = readings.require(center)?;
        frequency += reading.frequency;
        blockage += reading.blockage;
        scored.push((center, reading.score().max(0)));
    }

    // Stable sort on the integer score, so equal health keeps scan order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let overall_blockage = rounded_mean(blockage);
    Ok(ProfileMetrics {
        overall_frequency: rounded_mean(frequency),
        overall_blockage,
        energy_flow: 100 - overall_blockage,
        strongest_centers: scored
            .into_iter()
            .take(STRONGEST_CENTERS)
            .map(|(center, score)| CenterHealth {
                center,
                name: center.chakra_name().to_string(),
                health: (f64::from(score) / 3.0).round() as i32,
            })
            .collect(),
    })
}

fn rounded_mean(total: i32) -> i32 {
    (f64::from(total) / EnergyCenter::ALL.len() as f64).round() as i32
}
