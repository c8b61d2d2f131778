//! One-time test-state seeding.
//!
//! Browser-driven suites share an authentication storage-state file. Before
//! any test runs, an empty state (`{"cookies": [], "origins": []}`) is seeded
//! at `auth/storageState.json` unless one already exists; a previous run's
//! state is never overwritten.

use crate::error::SetupError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding shared authentication state, relative to the harness
/// working directory.
pub const AUTH_DIR: &str = "auth";
/// Storage-state file name inside [`AUTH_DIR`].
pub const STORAGE_STATE_FILE: &str = "storageState.json";

/// Persisted browser authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageState {
    pub cookies: Vec<serde_json::Value>,
    pub origins: Vec<serde_json::Value>,
}

/// Seed an empty storage state under `root` if none exists.
///
/// Returns the path to the state file. Creating the directory is idempotent;
/// an existing file is left untouched.
pub fn seed_storage_state(root: &Path) -> Result<PathBuf, SetupError> {
    let auth_dir = root.join(AUTH_DIR);
    let io_err = |path: &Path, source| SetupError::Io {
        path: path.display().to_string(),
        source,
    };

    std::fs::create_dir_all(&auth_dir).map_err(|e| io_err(&auth_dir, e))?;

    let state_path = auth_dir.join(STORAGE_STATE_FILE);
    if state_path.exists() {
        debug!("storage state already present at {}", state_path.display());
        return Ok(state_path);
    }

    let empty = serde_json::to_string(&StorageState::default())?;
    std::fs::write(&state_path, empty).map_err(|e| io_err(&state_path, e))?;
    info!("seeded empty storage state at {}", state_path.display());
    Ok(state_path)
}
