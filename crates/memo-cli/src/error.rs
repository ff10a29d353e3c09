use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] memo_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Could not save note: {0}")]
    Submit(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Session error: {0}")]
    Session(String),
    #[error(
        "Not signed in. Run `memo auth login --user-id <ID> --token <TOKEN>` with a session issued by your identity provider."
    )]
    NotSignedIn,
    #[error("API is not configured. Run `memo config init --api-url <URL> --api-key <KEY>` first.")]
    NotConfigured,
}
