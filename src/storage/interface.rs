//! Storage interface for generated profiles and sessions.

use super::records::{ProfileRecord, SessionRecord};
use crate::utilities::errors::StoreError;

/// Maximum number of records returned by a session history lookup.
pub const HISTORY_LIMIT: usize = 50;

/// Trait implemented by every profile storage backend.
///
/// Calls are synchronous; async callers move them onto a blocking thread.
pub trait ProfileStore: Send + Sync {
    /// Persist `record` and upsert its session in one step.
    ///
    /// The session's `profileCount` is incremented and `lastAccessedAt` set
    /// to the record's `createdAt`; `createdAt` of the session is only set
    /// the first time the session is seen.
    ///
    /// # Returns
    /// The session as it stands after the update.
    fn record_profile(&self, record: &ProfileRecord) -> Result<SessionRecord, StoreError>;

    /// Records for a session, newest first, at most `limit` of them.
    fn profiles_for_session(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileRecord>, StoreError>;

    /// A single record by id.
    fn profile_by_id(&self, id: &str) -> Result<Option<ProfileRecord>, StoreError>;

    /// Session bookkeeping, if the session has ever recorded a profile.
    fn session(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError>;
}
