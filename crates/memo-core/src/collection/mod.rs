//! Remote document collection seam.
//!
//! The remote store is a managed, schemaless, per-document collection
//! named `notes`, reachable over a network API. Everything here is the
//! raw document access the [`crate::store::NoteStore`] builds its
//! authorization boundary on; no ownership checks happen at this level.

pub mod memory;
pub mod rest;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteId, UserId};

pub use memory::MemoryCollection;
pub use rest::RestCollection;

/// Partial update applied to an existing document. `createdAt` and
/// `ownerId` are never part of a patch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

/// Raw CRUD against the `notes` collection.
///
/// All operations are asynchronous and may suspend waiting on the
/// remote store. `query_by_owner` gives no ordering guarantee.
#[allow(async_fn_in_trait)]
pub trait NoteCollection {
    /// Insert a new document; the collection assigns `id` and `createdAt`.
    async fn insert(&self, draft: &NoteDraft, owner: &UserId) -> Result<Note>;

    /// Fetch a document by id, `None` when absent.
    async fn fetch(&self, id: &NoteId) -> Result<Option<Note>>;

    /// Every document whose `ownerId` matches, in no particular order.
    async fn query_by_owner(&self, owner: &UserId) -> Result<Vec<Note>>;

    /// Merge-update a document by id; `NotFound` when absent.
    async fn merge(&self, id: &NoteId, patch: &NotePatch) -> Result<()>;

    /// Delete a document by id; `NotFound` when absent.
    async fn remove(&self, id: &NoteId) -> Result<()>;
}
