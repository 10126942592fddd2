//! Profile derivation: readings in, generated profile out.
//!
//! Everything here is a pure function of the input readings. Scans over
//! centers run in canonical order and replace the running best only on a
//! strictly greater value, so earlier centers win ties.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::center::EnergyCenter;
use super::readings::{EnergyCenterReading, EnergyCenterReadings};
use super::ProfileError;

/// Maximum number of personality traits kept.
pub const MAX_TRAITS: usize = 4;
/// Maximum number of personality behaviors kept.
pub const MAX_BEHAVIORS: usize = 3;
/// Maximum number of spiritual insights kept.
pub const MAX_INSIGHTS: usize = 3;
/// Maximum number of healing practices kept.
pub const MAX_PRACTICES: usize = 3;
/// Maximum number of growth areas kept.
pub const MAX_GROWTH_AREAS: usize = 3;

const PERSONALITY_FREQUENCY_THRESHOLD: i32 = 60;
const PERSONALITY_BLOCKAGE_THRESHOLD: i32 = 50;

// ============================================================================
// Output types
// ============================================================================

/// Developmental stage, ordered from least to most developed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OverallLevel {
    #[serde(rename = "Beginning Journey")]
    BeginningJourney,
    #[serde(rename = "Awakening Spirit")]
    AwakeningSpirit,
    #[serde(rename = "Developing Soul")]
    DevelopingSoul,
    #[serde(rename = "Advanced Seeker")]
    AdvancedSeeker,
}

impl OverallLevel {
    /// Map a level score by descending inclusive thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::AdvancedSeeker
        } else if score >= 60.0 {
            Self::DevelopingSoul
        } else if score >= 40.0 {
            Self::AwakeningSpirit
        } else {
            Self::BeginningJourney
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AdvancedSeeker => "Advanced Seeker",
            Self::DevelopingSoul => "Developing Soul",
            Self::AwakeningSpirit => "Awakening Spirit",
            Self::BeginningJourney => "Beginning Journey",
        }
    }

    /// Sentence describing this stage, used as `spiritual.level`.
    pub fn description(&self) -> String {
        format!(
            "You are currently at the \"{}\" stage of spiritual development. \
             This indicates your readiness for specific types of growth and service.",
            self.label()
        )
    }
}

impl fmt::Display for OverallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub traits: Vec<String>,
    pub behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spiritual {
    pub level: String,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Healing {
    pub practices: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// The derived profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProfile {
    pub overall_level: OverallLevel,
    pub overall_balance: i32,
    pub dominant_chakra: String,
    pub personality: Personality,
    pub spiritual: Spiritual,
    pub healing: Healing,
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive a profile from readings.
///
/// Bounds are not re-checked here; call
/// [`EnergyCenterReadings::validate`] at the boundary. A missing center
/// fails with [`ProfileError::MissingCenter`].
pub fn derive(readings: &EnergyCenterReadings) -> Result<GeneratedProfile, ProfileError> {
    let centers = collect(readings)?;

    let overall_balance = overall_balance(&centers);
    let overall_level = OverallLevel::from_score(level_score(&centers));

    Ok(GeneratedProfile {
        overall_level,
        overall_balance,
        dominant_chakra: dominant_center(&centers).dominant_label().to_string(),
        personality: personality(&centers),
        spiritual: spiritual(overall_balance, overall_level),
        healing: healing(&centers, overall_balance),
    })
}

type CenterTable = [(EnergyCenter, EnergyCenterReading); 7];

fn collect(readings: &EnergyCenterReadings) -> Result<CenterTable, ProfileError> {
    let mut table = [(EnergyCenter::Root, EnergyCenterReading::new(0, 0, 0)); 7];
    for (slot, center) in table.iter_mut().zip(EnergyCenter::ALL) {
        *slot = (center, *readings.require(center)?);
    }
    Ok(table)
}

/// Rounded mean of the seven balances (half-up; seven integers never tie).
fn overall_balance(centers: &CenterTable) -> i32 {
    let total: i32 = centers.iter().map(|(_, r)| r.balance).sum();
    (f64::from(total) / centers.len() as f64).round() as i32
}

/// `(avgFrequency + avgBalance - avgBlockage) / 2`, computed as one division
/// so that scores landing exactly on a threshold compare exactly.
fn level_score(centers: &CenterTable) -> f64 {
    let net: i32 = centers
        .iter()
        .map(|(_, r)| r.frequency + r.balance - r.blockage)
        .sum();
    f64::from(net) / (2 * centers.len()) as f64
}

/// First center in canonical order whose score strictly exceeds every earlier
/// one, starting from zero with `root` as the default.
fn dominant_center(centers: &CenterTable) -> EnergyCenter {
    first_strict_max(centers, |r| r.score())
}

/// Same scan as [`dominant_center`], over blockage.
fn most_blocked(centers: &CenterTable) -> EnergyCenter {
    first_strict_max(centers, |r| r.blockage)
}

fn first_strict_max(centers: &CenterTable, key: impl Fn(&EnergyCenterReading) -> i32) -> EnergyCenter {
    let mut best = 0;
    let mut winner = EnergyCenter::Root;
    for (center, reading) in centers {
        let value = key(reading);
        if value > best {
            best = value;
            winner = *center;
        }
    }
    winner
}

fn personality(centers: &CenterTable) -> Personality {
    let mut traits = Vec::new();
    let mut behaviors = Vec::new();

    for (center, reading) in centers {
        let text = if reading.frequency > PERSONALITY_FREQUENCY_THRESHOLD {
            center.strength()
        } else if reading.blockage > PERSONALITY_BLOCKAGE_THRESHOLD {
            center.challenge()
        } else {
            continue;
        };
        traits.push(text.trait_text.to_string());
        behaviors.push(text.behavior.to_string());
    }

    traits.truncate(MAX_TRAITS);
    behaviors.truncate(MAX_BEHAVIORS);
    Personality { traits, behaviors }
}

fn spiritual(overall_balance: i32, level: OverallLevel) -> Spiritual {
    let band: [&str; 2] = if overall_balance > 70 {
        [
            "Your energy centers show remarkable harmony, indicating advanced spiritual development.",
            "You have integrated many of your lessons and serve as a beacon for others.",
        ]
    } else if overall_balance > 50 {
        [
            "You are making steady progress on your spiritual journey with growing awareness.",
            "Continue working on balancing your energy centers for deeper insights.",
        ]
    } else {
        [
            "You are at the beginning of a beautiful spiritual awakening.",
            "Focus on healing and opening your energy centers gradually and lovingly.",
        ]
    };

    let label = level.label();
    let level_insight = if label.contains("Advanced") {
        "You may be called to teach or guide others on their spiritual paths."
    } else if label.contains("Developing") {
        "This is an excellent time to deepen your meditation and self-reflection practices."
    } else {
        "Begin with simple mindfulness practices and gentle energy work."
    };

    let mut insights: Vec<String> = band.iter().map(|s| s.to_string()).collect();
    insights.push(level_insight.to_string());
    insights.truncate(MAX_INSIGHTS);

    Spiritual {
        level: level.description(),
        insights,
    }
}

fn healing(centers: &CenterTable, overall_balance: i32) -> Healing {
    let mut practices: Vec<String> = if overall_balance < 50 {
        vec![
            "Begin each day with 10 minutes of grounding meditation to stabilize your energy.".into(),
            "Practice deep breathing exercises to clear energetic blockages.".into(),
        ]
    } else {
        vec![
            "Maintain your progress with daily energy alignment practices.".into(),
            "Consider energy healing modalities like Reiki or crystal work.".into(),
        ]
    };

    let text = most_blocked(centers).healing();
    practices.push(text.practice.to_string());

    let mut growth_areas = vec![
        text.growth.to_string(),
        "Continue regular spiritual practice to maintain and deepen your growth.".to_string(),
        "Consider working with a spiritual teacher or joining a like-minded community.".to_string(),
    ];

    practices.truncate(MAX_PRACTICES);
    growth_areas.truncate(MAX_GROWTH_AREAS);
    Healing {
        practices,
        growth_areas,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(frequency: i32, balance: i32, blockage: i32) -> EnergyCenterReading {
        EnergyCenterReading::new(frequency, balance, blockage)
    }

    /// The reference request body used by the API tests.
    fn reference_readings() -> EnergyCenterReadings {
        EnergyCenterReadings::new()
            .with(EnergyCenter::Root, reading(60, 70, 30))
            .with(EnergyCenter::Sacral, reading(55, 65, 25))
            .with(EnergyCenter::SolarPlexus, reading(75, 80, 20))
            .with(EnergyCenter::Heart, reading(85, 90, 15))
            .with(EnergyCenter::Throat, reading(70, 75, 25))
            .with(EnergyCenter::ThirdEye, reading(80, 85, 10))
            .with(EnergyCenter::Crown, reading(90, 95, 5))
    }

    #[test]
    fn test_overall_balance_is_rounded_mean() {
        let profile = derive(&reference_readings()).unwrap();
        assert_eq!(profile.overall_balance, 80);
    }

    #[test]
    fn test_overall_balance_rounds_to_nearest() {
        // 1+1+1+1+1+1+2 = 8, 8/7 = 1.14 -> 1
        let low = EnergyCenterReadings::uniform(reading(0, 1, 0))
            .with(EnergyCenter::Crown, reading(0, 2, 0));
        assert_eq!(derive(&low).unwrap().overall_balance, 1);

        // 6*1 + 5 = 11, 11/7 = 1.57 -> 2
        let high = EnergyCenterReadings::uniform(reading(0, 1, 0))
            .with(EnergyCenter::Crown, reading(0, 5, 0));
        assert_eq!(derive(&high).unwrap().overall_balance, 2);
    }

    #[test]
    fn test_all_high_readings_give_advanced_seeker() {
        let profile = derive(&EnergyCenterReadings::uniform(reading(90, 95, 5))).unwrap();
        assert_eq!(profile.overall_level, OverallLevel::AdvancedSeeker);
        assert!((0..=100).contains(&profile.overall_balance));
        assert!(profile.dominant_chakra.contains("Dominant"));
        assert!(!profile.personality.traits.is_empty());
        assert!(!profile.personality.behaviors.is_empty());
        assert!(!profile.spiritual.insights.is_empty());
        assert!(!profile.healing.practices.is_empty());
        assert!(!profile.healing.growth_areas.is_empty());
    }

    #[test]
    fn test_level_score_exactly_eighty_is_advanced() {
        // net per center = 160, 7 * 160 / 14 = 80
        let readings = EnergyCenterReadings::uniform(reading(80, 80, 0));
        assert_eq!(
            derive(&readings).unwrap().overall_level,
            OverallLevel::AdvancedSeeker
        );

        // one point less overall: 1119 / 14 = 79.93
        let readings = readings.with(EnergyCenter::Crown, reading(80, 80, 1));
        assert_eq!(
            derive(&readings).unwrap().overall_level,
            OverallLevel::DevelopingSoul
        );
    }

    #[test]
    fn test_level_thresholds_are_inclusive_and_descending() {
        assert_eq!(OverallLevel::from_score(80.0), OverallLevel::AdvancedSeeker);
        assert_eq!(OverallLevel::from_score(79.999), OverallLevel::DevelopingSoul);
        assert_eq!(OverallLevel::from_score(60.0), OverallLevel::DevelopingSoul);
        assert_eq!(OverallLevel::from_score(59.999), OverallLevel::AwakeningSpirit);
        assert_eq!(OverallLevel::from_score(40.0), OverallLevel::AwakeningSpirit);
        assert_eq!(OverallLevel::from_score(39.999), OverallLevel::BeginningJourney);
        assert_eq!(OverallLevel::from_score(-50.0), OverallLevel::BeginningJourney);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_value(OverallLevel::DevelopingSoul).unwrap();
        assert_eq!(json, "Developing Soul");
    }

    #[test]
    fn test_dominant_tie_goes_to_earlier_center() {
        let readings = EnergyCenterReadings::uniform(reading(10, 10, 10))
            .with(EnergyCenter::Root, reading(50, 50, 0))
            .with(EnergyCenter::Heart, reading(60, 40, 0));
        let profile = derive(&readings).unwrap();
        assert_eq!(profile.dominant_chakra, "Root Dominant");
    }

    #[test]
    fn test_dominant_picks_strictly_highest() {
        let readings = EnergyCenterReadings::uniform(reading(10, 10, 10))
            .with(EnergyCenter::ThirdEye, reading(90, 90, 0));
        assert_eq!(derive(&readings).unwrap().dominant_chakra, "Third Eye Dominant");
    }

    #[test]
    fn test_dominant_defaults_to_root_when_no_positive_score() {
        let readings = EnergyCenterReadings::uniform(reading(0, 0, 100));
        assert_eq!(derive(&readings).unwrap().dominant_chakra, "Root Dominant");
    }

    #[test]
    fn test_personality_strength_wins_over_challenge() {
        let readings = EnergyCenterReadings::uniform(reading(50, 50, 10))
            .with(EnergyCenter::Heart, reading(61, 50, 90));
        let profile = derive(&readings).unwrap();
        assert_eq!(
            profile.personality.traits,
            vec![EnergyCenter::Heart.strength().trait_text.to_string()]
        );
        assert_eq!(
            profile.personality.behaviors,
            vec![EnergyCenter::Heart.strength().behavior.to_string()]
        );
    }

    #[test]
    fn test_personality_thresholds_are_strict() {
        let readings = EnergyCenterReadings::uniform(reading(60, 50, 50));
        let profile = derive(&readings).unwrap();
        assert!(profile.personality.traits.is_empty());
        assert!(profile.personality.behaviors.is_empty());
    }

    #[test]
    fn test_personality_truncates_in_canonical_order() {
        let readings = EnergyCenterReadings::uniform(reading(20, 20, 80));
        let profile = derive(&readings).unwrap();
        let expected_traits: Vec<String> = EnergyCenter::ALL[..4]
            .iter()
            .map(|c| c.challenge().trait_text.to_string())
            .collect();
        let expected_behaviors: Vec<String> = EnergyCenter::ALL[..3]
            .iter()
            .map(|c| c.challenge().behavior.to_string())
            .collect();
        assert_eq!(profile.personality.traits, expected_traits);
        assert_eq!(profile.personality.behaviors, expected_behaviors);
    }

    #[test]
    fn test_spiritual_bands() {
        let high = spiritual(71, OverallLevel::AdvancedSeeker);
        assert!(high.insights[0].starts_with("Your energy centers show remarkable harmony"));
        assert!(high.insights[2].contains("teach or guide"));

        let mid = spiritual(70, OverallLevel::DevelopingSoul);
        assert!(mid.insights[0].starts_with("You are making steady progress"));
        assert!(mid.insights[2].contains("deepen your meditation"));

        let low = spiritual(50, OverallLevel::AwakeningSpirit);
        assert!(low.insights[0].starts_with("You are at the beginning"));
        assert!(low.insights[2].contains("simple mindfulness"));
        assert_eq!(low.insights.len(), 3);
    }

    #[test]
    fn test_spiritual_level_sentence_quotes_label() {
        let s = spiritual(60, OverallLevel::BeginningJourney);
        assert!(s.level.contains("\"Beginning Journey\" stage"));
    }

    #[test]
    fn test_healing_uses_most_blocked_center() {
        let readings = EnergyCenterReadings::uniform(reading(50, 40, 20))
            .with(EnergyCenter::Throat, reading(50, 40, 70))
            .with(EnergyCenter::Crown, reading(50, 40, 70));
        let profile = derive(&readings).unwrap();
        let text = EnergyCenter::Throat.healing();
        assert_eq!(profile.healing.practices.len(), 3);
        assert!(profile.healing.practices[0].contains("grounding meditation"));
        assert_eq!(profile.healing.practices[2], text.practice);
        assert_eq!(profile.healing.growth_areas[0], text.growth);
        assert_eq!(profile.healing.growth_areas.len(), 3);
    }

    #[test]
    fn test_healing_defaults_to_root_without_blockage() {
        let readings = EnergyCenterReadings::uniform(reading(50, 60, 0));
        let profile = derive(&readings).unwrap();
        assert!(profile.healing.practices[0].contains("daily energy alignment"));
        assert_eq!(profile.healing.practices[2], EnergyCenter::Root.healing().practice);
    }

    #[test]
    fn test_healing_band_boundary_at_fifty() {
        let at_fifty = derive(&EnergyCenterReadings::uniform(reading(50, 50, 0))).unwrap();
        assert_eq!(at_fifty.overall_balance, 50);
        assert!(at_fifty.healing.practices[0].contains("daily energy alignment"));
        assert!(at_fifty.healing.practices[1].contains("Reiki"));

        let below = derive(&EnergyCenterReadings::uniform(reading(50, 49, 0))).unwrap();
        assert_eq!(below.overall_balance, 49);
        assert!(below.healing.practices[0].contains("grounding meditation"));
        assert!(below.healing.practices[1].contains("deep breathing"));
    }

    #[test]
    fn test_truncation_law_over_sampled_inputs() {
        let values = [0, 25, 50, 51, 60, 61, 75, 100];
        for &f in &values {
            for &b in &values {
                for &x in &values {
                    let readings = EnergyCenterReadings::uniform(reading(f, b, x))
                        .with(EnergyCenter::Heart, reading(x, f, b));
                    let p = derive(&readings).unwrap();
                    assert!(p.personality.traits.len() <= MAX_TRAITS);
                    assert!(p.personality.behaviors.len() <= MAX_BEHAVIORS);
                    assert!(p.spiritual.insights.len() <= MAX_INSIGHTS);
                    assert!(p.healing.practices.len() <= MAX_PRACTICES);
                    assert!(p.healing.growth_areas.len() <= MAX_GROWTH_AREAS);
                    assert!((0..=100).contains(&p.overall_balance));
                    assert!(p.dominant_chakra.ends_with("Dominant"));
                }
            }
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let readings = reference_readings();
        let a = serde_json::to_string(&derive(&readings).unwrap()).unwrap();
        let b = serde_json::to_string(&derive(&readings).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_crown_is_reported() {
        let mut readings = reference_readings();
        readings.remove(EnergyCenter::Crown);
        match derive(&readings) {
            Err(ProfileError::MissingCenter { center }) => {
                assert_eq!(center, EnergyCenter::Crown);
                assert_eq!(center.key(), "crown");
            }
            other => panic!("expected MissingCenter, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_wire_format_uses_camel_case() {
        let json = serde_json::to_value(derive(&reference_readings()).unwrap()).unwrap();
        assert_eq!(json["overallLevel"], "Developing Soul");
        assert_eq!(json["overallBalance"], 80);
        assert_eq!(json["dominantChakra"], "Crown Dominant");
        assert!(json["healing"]["growthAreas"].is_array());
        assert!(json["spiritual"]["level"].is_string());
        assert!(json["personality"]["traits"].is_array());
    }
}
