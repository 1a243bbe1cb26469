use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedProfile {
    saved_name: String,
}

/// Persists the submitter's name across sessions as a small JSON
/// document. Loaded when the controller is constructed, overwritten on
/// each successful submission.
pub struct NameStore {
    path: PathBuf,
}

impl NameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing or unreadable profile is not an error, just an empty
    /// form.
    pub fn load(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!("No saved profile at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<SavedProfile>(&raw) {
            Ok(profile) => Some(profile.saved_name),
            Err(e) => {
                tracing::debug!("Ignoring malformed profile {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, name: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }

        let profile = SavedProfile {
            saved_name: name.to_string(),
        };
        let raw =
            serde_json::to_string(&profile).map_err(|e| AppError::Storage(e.to_string()))?;

        fs::write(&self.path, raw).map_err(|e| AppError::Storage(e.to_string()))
    }
}
