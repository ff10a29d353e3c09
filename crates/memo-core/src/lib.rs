//! memo-core - Core library for Memo
//!
//! This crate contains the note model, the session/authorization gate,
//! the remote document collection seam, the owner-scoped note store,
//! and the view state machines shared by all Memo interfaces.

pub mod collection;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod views;

pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId, UserId};
pub use store::NoteStore;
