//! Profile and session persistence.
//!
//! - [`interface`]: the [`ProfileStore`] trait
//! - [`memory_store`]: in-memory backend (default)
//! - [`sqlite_store`]: SQLite backend
//! - [`records`]: persisted record types

pub mod interface;
pub mod memory_store;
pub mod records;
pub mod sqlite_store;

use std::sync::Arc;

pub use interface::{ProfileStore, HISTORY_LIMIT};
pub use memory_store::MemoryStore;
pub use records::{ProfileRecord, SessionRecord};
pub use sqlite_store::SqliteStore;

use crate::utilities::config::{ServerConfig, StoreKind};
use crate::utilities::errors::StoreError;

/// Open the backend selected by `config`.
pub fn open_store(config: &ServerConfig) -> Result<Arc<dyn ProfileStore>, StoreError> {
    match config.store {
        StoreKind::Memory => {
            log::debug!("Using in-memory profile store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreKind::Sqlite => {
            log::debug!("Using SQLite profile store at {}", config.db_path.display());
            Ok(Arc::new(SqliteStore::open(&config.db_path)?))
        }
    }
}
