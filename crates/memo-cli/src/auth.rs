//! Stored-session handling for the CLI.
//!
//! Sign-in itself happens against the external identity provider; the
//! CLI only persists the resulting session per profile and replays it
//! as the current identity when commands run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use memo_core::session::StaticSessionProvider;
use memo_core::UserId;

use crate::config;
use crate::error::CliError;

/// A session issued by the identity provider, as the CLI keeps it on
/// disk.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub user_id: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// Keeps the access token out of logs and error messages.
impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("user_id", &self.user_id)
            .field("access_token", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

impl StoredSession {
    pub fn provider(&self) -> StaticSessionProvider {
        StaticSessionProvider::signed_in(UserId::from(self.user_id.as_str()))
    }
}

/// File-backed session storage, one file per profile.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn for_profile(profile_name: &str) -> Self {
        Self {
            path: config::config_dir().join(format!("session-{profile_name}.json")),
        }
    }

    #[cfg(test)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<StoredSession>, CliError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|error| {
            CliError::Session(format!(
                "Failed to read session at {}: {}",
                self.path.display(),
                error
            ))
        })?;
        let session = serde_json::from_str(&raw).map_err(|error| {
            CliError::Session(format!(
                "Failed to parse session at {}: {}",
                self.path.display(),
                error
            ))
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &StoredSession) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                CliError::Session(format!(
                    "Failed to create session directory {}: {}",
                    parent.display(),
                    error
                ))
            })?;
        }

        let serialized = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, serialized).map_err(|error| {
            CliError::Session(format!(
                "Failed to write session at {}: {}",
                self.path.display(),
                error
            ))
        })
    }

    /// Removing an absent session is fine.
    pub fn clear(&self) -> Result<(), CliError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(CliError::Session(format!(
                "Failed to clear session at {}: {}",
                self.path.display(),
                error
            ))),
        }
    }
}
