//! Path management for profile storage.

use std::env;
use std::path::PathBuf;

/// Default SQLite file name inside the data directory.
pub const DEFAULT_DB_FILE: &str = "energy_profiles.db";

const APP_AUTHOR: &str = "ChakraProfile";

/// Directory name used under the data dir when `PROFILE_STORAGE_DIR` is unset.
pub const DEFAULT_PROJECT_DIR: &str = "chakra_profile";

/// Returns the platform-specific data directory used for SQLite storage.
///
/// The directory is not created here; the SQLite store creates it on open.
pub fn db_storage_path() -> PathBuf {
    let app_name = get_project_directory_name();

    // On Linux: ~/.local/share/<app_author>/<app_name>
    // On macOS: ~/Library/Application Support/<app_author>/<app_name>
    // On Windows: %LOCALAPPDATA%\<app_author>\<app_name>
    let base = if cfg!(target_os = "linux") {
        let home = env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        PathBuf::from(home).join(".local").join("share")
    } else if cfg!(target_os = "macos") {
        let home = env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        PathBuf::from(home).join("Library").join("Application Support")
    } else if cfg!(target_os = "windows") {
        let local_app_data = env::var("LOCALAPPDATA")
            .unwrap_or_else(|_| env::var("APPDATA").unwrap_or_else(|_| "C:\\tmp".to_string()));
        PathBuf::from(local_app_data)
    } else {
        PathBuf::from("/tmp")
    };

    base.join(APP_AUTHOR).join(app_name)
}

/// Default SQLite database path: `<db_storage_path>/energy_profiles.db`.
pub fn default_db_path() -> PathBuf {
    db_storage_path().join(DEFAULT_DB_FILE)
}

/// Returns the project directory name.
///
/// Uses `PROFILE_STORAGE_DIR` if set and non-empty, otherwise
/// [`DEFAULT_PROJECT_DIR`].
pub fn get_project_directory_name() -> String {
    project_directory_name(env::var("PROFILE_STORAGE_DIR").ok())
}

fn project_directory_name(override_name: Option<String>) -> String {
    override_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PROJECT_DIR.to_string())
}
