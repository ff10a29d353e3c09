//! Data models for memo-core

pub mod note;

pub use note::{Note, NoteDraft, NoteId, UserId};
