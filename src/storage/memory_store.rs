//! In-memory profile store.
//!
//! Default backend; contents are lost when the process exits.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::interface::ProfileStore;
use super::records::{ProfileRecord, SessionRecord};
use crate::utilities::errors::StoreError;

#[derive(Debug, Default)]
struct Inner {
    /// Records in insertion order.
    profiles: Vec<ProfileRecord>,
    /// Record id -> index into `profiles`.
    by_id: HashMap<String, usize>,
    /// Session id -> bookkeeping.
    sessions: HashMap<String, SessionRecord>,
}

/// Profile store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profile records.
    pub fn len(&self) -> usize {
        self.inner.read().profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryStore {
    fn record_profile(&self, record: &ProfileRecord) -> Result<SessionRecord, StoreError> {
        let mut inner = self.inner.write();

        let index = inner.profiles.len();
        inner.profiles.push(record.clone());
        inner.by_id.insert(record.id.clone(), index);

        let session = inner
            .sessions
            .entry(record.session_id.clone())
            .and_modify(|s| s.touch(record.created_at))
            .or_insert_with(|| SessionRecord::first_visit(&record.session_id, record.created_at));
        Ok(session.clone())
    }

    fn profiles_for_session(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileRecord>, StoreError> {
        let inner = self.inner.read();
        // Walk newest-inserted first so equal timestamps keep insertion recency.
        let mut matches: Vec<&ProfileRecord> = inner
            .profiles
            .iter()
            .rev()
            .filter(|p| p.session_id == session_id)
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches.into_iter().take(limit).cloned().collect())
    }

    fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.by_id.get(id).map(|&i| inner.profiles[i].clone()))
    }

    fn session(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.inner.read().sessions.get(session_id).cloned())
    }
}
