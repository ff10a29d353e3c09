//! Owner-scoped note store.
//!
//! Stateless access boundary around the remote `notes` collection: all
//! reads and writes pass through here, and every authorization check
//! compares a document's `ownerId` against the identity resolved from
//! the session handle at call time. Callers never supply the identity
//! themselves.

use chrono::Utc;

use crate::collection::{NoteCollection, NotePatch};
use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId, UserId};
use crate::session::SessionHandle;

pub struct NoteStore<C> {
    collection: C,
    session: SessionHandle,
}

impl<C: NoteCollection> NoteStore<C> {
    pub fn new(collection: C, session: SessionHandle) -> Self {
        Self {
            collection,
            session,
        }
    }

    /// Identity at this moment; calls without one fail closed.
    fn current_user(&self) -> Result<UserId> {
        self.session.current().user_id().cloned().ok_or_else(|| {
            Error::PermissionDenied("no authenticated identity".to_string())
        })
    }

    /// Create a note owned by the current identity.
    ///
    /// Validation runs before any remote call; the collection assigns
    /// the id and creation timestamp.
    pub async fn create(&self, title: &str, content: &str) -> Result<Note> {
        let draft = NoteDraft::new(title, content)?;
        let owner = self.current_user()?;

        let note = self.collection.insert(&draft, &owner).await?;
        tracing::debug!(id = %note.id, "created note");
        Ok(note)
    }

    /// Every note owned by the current identity, in collection order.
    /// Ordering, if any, is imposed by the caller.
    pub async fn list(&self) -> Result<Vec<Note>> {
        let owner = self.current_user()?;
        self.collection.query_by_owner(&owner).await
    }

    /// Fetch a single note, enforcing ownership.
    pub async fn get(&self, id: &NoteId) -> Result<Note> {
        let user = self.current_user()?;
        let note = self
            .collection
            .fetch(id)
            .await?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        if !note.is_owned_by(&user) {
            return Err(Error::PermissionDenied(id.to_string()));
        }
        Ok(note)
    }

    /// Replace title and content, stamping `updatedAt`.
    ///
    /// `createdAt` and `ownerId` are left untouched.
    pub async fn update(&self, id: &NoteId, title: &str, content: &str) -> Result<()> {
        let draft = NoteDraft::new(title, content)?;
        // Ownership check against the live document, not a cached view.
        self.get(id).await?;

        let patch = NotePatch {
            title: draft.title().to_string(),
            content: draft.content().to_string(),
            updated_at: Utc::now(),
        };
        self.collection.merge(id, &patch).await?;
        tracing::debug!(id = %id, "updated note");
        Ok(())
    }

    /// Delete a note owned by the current identity.
    ///
    /// Deleting a missing id fails with `NotFound`; idempotence, if
    /// wanted, is a caller policy.
    pub async fn delete(&self, id: &NoteId) -> Result<()> {
        self.get(id).await?;
        self.collection.remove(id).await?;
        tracing::debug!(id = %id, "deleted note");
        Ok(())
    }
}
