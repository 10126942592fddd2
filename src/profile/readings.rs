//! Energy center readings: the input side of profile derivation.

use std::collections::{BTreeMap, HashMap};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::center::EnergyCenter;
use super::ProfileError;

/// Inclusive lower bound of every reading field.
pub const READING_MIN: i32 = 0;
/// Inclusive upper bound of every reading field.
pub const READING_MAX: i32 = 100;

/// Frequency, balance and blockage of a single center, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyCenterReading {
    pub frequency: i32,
    pub balance: i32,
    pub blockage: i32,
}

impl EnergyCenterReading {
    pub fn new(frequency: i32, balance: i32, blockage: i32) -> Self {
        Self {
            frequency,
            balance,
            blockage,
        }
    }

    /// `frequency + balance - blockage`, the score used to pick the dominant center.
    pub fn score(&self) -> i32 {
        self.frequency + self.balance - self.blockage
    }

    fn fields(&self) -> [(&'static str, i32); 3] {
        [
            ("frequency", self.frequency),
            ("balance", self.balance),
            ("blockage", self.blockage),
        ]
    }
}

/// A problem found while validating readings at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("energyCenters.{center}: field required")]
    MissingCenter { center: EnergyCenter },

    #[error("energyCenters.{center}.{field}: {value} is not between 0 and 100")]
    OutOfRange {
        center: EnergyCenter,
        field: &'static str,
        value: i32,
    },
}

/// Readings keyed by center.
///
/// Deserializes from a JSON object keyed by camelCase center names; unknown
/// keys are dropped. Serializes in canonical center order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, EnergyCenterReading>")]
pub struct EnergyCenterReadings {
    centers: BTreeMap<EnergyCenter, EnergyCenterReading>,
}

impl EnergyCenterReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// All seven centers set to the same reading.
    pub fn uniform(reading: EnergyCenterReading) -> Self {
        EnergyCenter::ALL
            .iter()
            .map(|&center| (center, reading))
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, center: EnergyCenter, reading: EnergyCenterReading) -> Self {
        self.centers.insert(center, reading);
        self
    }

    pub fn insert(&mut self, center: EnergyCenter, reading: EnergyCenterReading) {
        self.centers.insert(center, reading);
    }

    pub fn remove(&mut self, center: EnergyCenter) -> Option<EnergyCenterReading> {
        self.centers.remove(&center)
    }

    pub fn get(&self, center: EnergyCenter) -> Option<&EnergyCenterReading> {
        self.centers.get(&center)
    }

    /// Reading for `center`, or [`ProfileError::MissingCenter`] naming its key.
    pub fn require(&self, center: EnergyCenter) -> Result<&EnergyCenterReading, ProfileError> {
        self.centers
            .get(&center)
            .ok_or(ProfileError::MissingCenter { center })
    }

    /// Iterate present readings in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EnergyCenter, &EnergyCenterReading)> {
        self.centers.iter().map(|(center, reading)| (*center, reading))
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Check the seven-center invariant and the `[0, 100]` bounds.
    ///
    /// Collects every issue rather than stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        for center in EnergyCenter::ALL {
            let Some(reading) = self.centers.get(&center) else {
                issues.push(ValidationIssue::MissingCenter { center });
                continue;
            };
            for (field, value) in reading.fields() {
                if !(READING_MIN..=READING_MAX).contains(&value) {
                    issues.push(ValidationIssue::OutOfRange {
                        center,
                        field,
                        value,
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl FromIterator<(EnergyCenter, EnergyCenterReading)> for EnergyCenterReadings {
    fn from_iter<I: IntoIterator<Item = (EnergyCenter, EnergyCenterReading)>>(iter: I) -> Self {
        Self {
            centers: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, EnergyCenterReading>> for EnergyCenterReadings {
    fn from(raw: HashMap<String, EnergyCenterReading>) -> Self {
        raw.into_iter()
            .filter_map(|(key, reading)| EnergyCenter::from_key(&key).map(|c| (c, reading)))
            .collect()
    }
}

impl Serialize for EnergyCenterReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.centers.len()))?;
        for (center, reading) in &self.centers {
            map.serialize_entry(center.key(), reading)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "root": {"frequency": 60, "balance": 70, "blockage": 30},
            "sacral": {"frequency": 55, "balance": 65, "blockage": 25},
            "solarPlexus": {"frequency": 75, "balance": 80, "blockage": 20},
            "heart": {"frequency": 85, "balance": 90, "blockage": 15},
            "throat": {"frequency": 70, "balance": 75, "blockage": 25},
            "thirdEye": {"frequency": 80, "balance": 85, "blockage": 10},
            "crown": {"frequency": 90, "balance": 95, "blockage": 5}
        })
    }

    #[test]
    fn test_deserialize_all_seven_centers() {
        let readings: EnergyCenterReadings = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(readings.len(), 7);
        assert_eq!(
            readings.get(EnergyCenter::SolarPlexus),
            Some(&EnergyCenterReading::new(75, 80, 20))
        );
        assert!(readings.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut json = sample_json();
        json["spleen"] = serde_json::json!({"frequency": 1, "balance": 1, "blockage": 1});
        let readings: EnergyCenterReadings = serde_json::from_value(json).unwrap();
        assert_eq!(readings.len(), 7);
    }

    #[test]
    fn test_serialize_in_canonical_order() {
        let readings: EnergyCenterReadings = serde_json::from_value(sample_json()).unwrap();
        let text = serde_json::to_string(&readings).unwrap();
        let root = text.find("\"root\"").unwrap();
        let heart = text.find("\"heart\"").unwrap();
        let crown = text.find("\"crown\"").unwrap();
        assert!(root < heart && heart < crown);
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let readings = EnergyCenterReadings::uniform(EnergyCenterReading::new(50, 50, 50))
            .with(EnergyCenter::Root, EnergyCenterReading::new(-10, 150, 30));
        let mut readings = readings;
        readings.remove(EnergyCenter::Crown);

        let issues = readings.validate().unwrap_err();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&ValidationIssue::OutOfRange {
            center: EnergyCenter::Root,
            field: "frequency",
            value: -10,
        }));
        assert!(issues.contains(&ValidationIssue::OutOfRange {
            center: EnergyCenter::Root,
            field: "balance",
            value: 150,
        }));
        assert!(issues.contains(&ValidationIssue::MissingCenter {
            center: EnergyCenter::Crown
        }));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let readings = EnergyCenterReadings::uniform(EnergyCenterReading::new(0, 100, 0));
        assert!(readings.validate().is_ok());
    }

    #[test]
    fn test_require_names_missing_center() {
        let mut readings = EnergyCenterReadings::uniform(EnergyCenterReading::new(1, 2, 3));
        readings.remove(EnergyCenter::ThirdEye);
        let err = readings.require(EnergyCenter::ThirdEye).unwrap_err();
        assert_eq!(err.to_string(), "Missing energy center: thirdEye");
    }
}
