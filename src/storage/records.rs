//! Persisted record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::{EnergyCenterReadings, GeneratedProfile};

/// A generated profile stored with the readings it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub session_id: String,
    pub energy_centers: EnergyCenterReadings,
    pub generated_profile: GeneratedProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    /// New record with a fresh UUID v4 id, stamped now.
    pub fn new(
        session_id: impl Into<String>,
        energy_centers: EnergyCenterReadings,
        generated_profile: GeneratedProfile,
    ) -> Self {
        Self::created_at(session_id, energy_centers, generated_profile, Utc::now())
    }

    /// New record stamped at `at`.
    pub fn created_at(
        session_id: impl Into<String>,
        energy_centers: EnergyCenterReadings,
        generated_profile: GeneratedProfile,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            energy_centers,
            generated_profile,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Per-session bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub profile_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Session seen for the first time at `at`, with one profile.
    pub fn first_visit(session_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            session_id: session_id.into(),
            profile_count: 1,
            created_at: at,
            last_accessed_at: at,
        }
    }

    /// Count another profile and move the last-access time forward.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.profile_count += 1;
        self.last_accessed_at = at;
    }
}
