//! The seven energy centers and their fixed text tables.
//!
//! Every per-center lookup (display labels, personality sentences, healing
//! text) is a static array indexed by [`EnergyCenter`] discriminant, so the
//! tables cannot drift out of step with the enum.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// The seven centers
// ============================================================================

/// One of the seven energy centers.
///
/// Declaration order is the canonical scan order used for tie-breaking and
/// truncation throughout profile derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnergyCenter {
    Root,
    Sacral,
    SolarPlexus,
    Heart,
    Throat,
    ThirdEye,
    Crown,
}

impl EnergyCenter {
    /// All seven centers in canonical order.
    pub const ALL: [EnergyCenter; 7] = [
        Self::Root,
        Self::Sacral,
        Self::SolarPlexus,
        Self::Heart,
        Self::Throat,
        Self::ThirdEye,
        Self::Crown,
    ];

    /// Wire key, e.g. `"solarPlexus"`.
    pub fn key(&self) -> &'static str {
        CENTER_KEYS[*self as usize]
    }

    /// Parse a wire key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Label used for `dominantChakra`, e.g. `"Third Eye Dominant"`.
    pub fn dominant_label(&self) -> &'static str {
        DOMINANT_LABELS[*self as usize]
    }

    /// Human name used by the blockage questionnaire, e.g. `"Solar Plexus Chakra"`.
    pub fn chakra_name(&self) -> &'static str {
        CHAKRA_NAMES[*self as usize]
    }

    /// Trait and behavior sentences for a strong (high frequency) center.
    pub fn strength(&self) -> &'static PersonalityText {
        &STRENGTHS[*self as usize]
    }

    /// Trait and behavior sentences for a blocked center.
    pub fn challenge(&self) -> &'static PersonalityText {
        &CHALLENGES[*self as usize]
    }

    /// Practice and growth-area sentences used when this center is the most blocked.
    pub fn healing(&self) -> &'static HealingText {
        &HEALING[*self as usize]
    }
}

impl fmt::Display for EnergyCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A trait sentence paired with a behavior sentence.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityText {
    pub trait_text: &'static str,
    pub behavior: &'static str,
}

/// A practice sentence paired with a growth-area sentence.
#[derive(Debug, Clone, Copy)]
pub struct HealingText {
    pub practice: &'static str,
    pub growth: &'static str,
}

// ============================================================================
// Static tables (indexed by `EnergyCenter as usize`)
// ============================================================================

const CENTER_KEYS: [&str; 7] = [
    "root",
    "sacral",
    "solarPlexus",
    "heart",
    "throat",
    "thirdEye",
    "crown",
];

const DOMINANT_LABELS: [&str; 7] = [
    "Root Dominant",
    "Sacral Dominant",
    "Solar Dominant",
    "Heart Dominant",
    "Throat Dominant",
    "Third Eye Dominant",
    "Crown Dominant",
];

const CHAKRA_NAMES: [&str; 7] = [
    "Root Chakra",
    "Sacral Chakra",
    "Solar Plexus Chakra",
    "Heart Chakra",
    "Throat Chakra",
    "Third Eye Chakra",
    "Crown Chakra",
];

const STRENGTHS: [PersonalityText; 7] = [
    PersonalityText {
        trait_text: "You have a strong foundation and feel secure in your physical existence.",
        behavior: "You approach challenges with practical wisdom and grounded thinking.",
    },
    PersonalityText {
        trait_text: "You express creativity freely and maintain healthy emotional boundaries.",
        behavior: "You embrace pleasure and intimacy with balanced enthusiasm.",
    },
    PersonalityText {
        trait_text: "You possess strong personal power and confident self-expression.",
        behavior: "You take initiative and make decisions with clarity and purpose.",
    },
    PersonalityText {
        trait_text: "You radiate love and compassion, creating harmonious relationships.",
        behavior: "You offer support to others naturally and practice forgiveness easily.",
    },
    PersonalityText {
        trait_text: "You communicate truth with clarity and express yourself authentically.",
        behavior: "You speak up for your beliefs and listen actively to others.",
    },
    PersonalityText {
        trait_text: "You possess strong intuition and see beyond surface appearances.",
        behavior: "You trust your inner wisdom and make decisions from deep knowing.",
    },
    PersonalityText {
        trait_text: "You feel connected to universal consciousness and divine purpose.",
        behavior: "You seek meaning through spiritual practice and service to others.",
    },
];

const CHALLENGES: [PersonalityText; 7] = [
    PersonalityText {
        trait_text: "You may struggle with feelings of insecurity or survival fears.",
        behavior: "You tend to worry about basic needs and material security.",
    },
    PersonalityText {
        trait_text: "You may experience creative blocks or emotional numbness.",
        behavior: "You might avoid emotional intimacy or struggle with guilt around pleasure.",
    },
    PersonalityText {
        trait_text: "You may struggle with low self-esteem or feelings of powerlessness.",
        behavior: "You tend to second-guess yourself and avoid taking leadership roles.",
    },
    PersonalityText {
        trait_text: "You may have difficulty trusting others or expressing love freely.",
        behavior: "You tend to build walls to protect yourself from emotional hurt.",
    },
    PersonalityText {
        trait_text: "You may struggle to express your truth or fear being judged.",
        behavior: "You tend to remain silent when you should speak up.",
    },
    PersonalityText {
        trait_text: "You may struggle with confusion or difficulty accessing intuitive insights.",
        behavior: "You tend to overthink and rely too heavily on logical analysis.",
    },
    PersonalityText {
        trait_text: "You may feel spiritually disconnected or question life's greater purpose.",
        behavior: "You tend to focus only on material concerns and dismiss spiritual matters.",
    },
];

const HEALING: [HealingText; 7] = [
    HealingText {
        practice: "Spend time in nature, practice yoga poses like child's pose and mountain pose.",
        growth: "Work on building financial security and stable relationships.",
    },
    HealingText {
        practice: "Engage in creative activities, dance, and practice hip-opening yoga poses.",
        growth: "Explore healthy expressions of sexuality and emotional intimacy.",
    },
    HealingText {
        practice: "Practice power poses, affirmations, and core-strengthening exercises.",
        growth: "Develop leadership skills and practice setting healthy boundaries.",
    },
    HealingText {
        practice: "Practice loving-kindness meditation and heart-opening yoga poses.",
        growth: "Work on forgiveness practices and opening to deeper relationships.",
    },
    HealingText {
        practice: "Practice chanting, singing, or journaling to express your truth.",
        growth: "Work on authentic communication and creative self-expression.",
    },
    HealingText {
        practice: "Practice meditation, visualization, and dream work to enhance intuition.",
        growth: "Develop psychic abilities and trust in your inner knowing.",
    },
    HealingText {
        practice: "Engage in prayer, meditation, and study of spiritual texts.",
        growth: "Explore your connection to the divine and life's greater purpose.",
    },
];

// ============================================================================
// Tests
// ============================================================================
