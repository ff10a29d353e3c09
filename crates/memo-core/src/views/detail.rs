//! Single-note detail view with the guarded two-step delete flow.

use super::CancelToken;
use crate::collection::NoteCollection;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::store::NoteStore;

/// Where the delete confirmation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStage {
    Idle,
    Confirming,
}

/// One loaded note plus its deletion state machine.
///
/// Loading repeats the ownership check even though the list view only
/// ever shows the owner's notes: direct navigation to another owner's
/// note id must fail here on its own.
pub struct DetailView {
    note: Note,
    stage: DeleteStage,
    busy: bool,
}

impl DetailView {
    /// Fetch the note, surfacing `NotFound` and `PermissionDenied` to
    /// the caller. `Ok(None)` means the token was cancelled while the
    /// fetch was in flight and the result was discarded.
    pub async fn load<C: NoteCollection>(
        store: &NoteStore<C>,
        id: NoteId,
        cancel: &CancelToken,
    ) -> Result<Option<Self>> {
        let note = store.get(&id).await?;
        if cancel.is_cancelled() {
            tracing::debug!(id = %id, "detail load finished after teardown; discarding");
            return Ok(None);
        }

        Ok(Some(Self {
            note,
            stage: DeleteStage::Idle,
            busy: false,
        }))
    }

    #[must_use]
    pub const fn note(&self) -> &Note {
        &self.note
    }

    #[must_use]
    pub const fn stage(&self) -> DeleteStage {
        self.stage
    }

    /// Open the confirmation state; no mutation yet.
    pub fn request_delete(&mut self) {
        self.stage = DeleteStage::Confirming;
    }

    /// Close the confirmation state; no mutation happened.
    pub fn cancel_delete(&mut self) {
        self.stage = DeleteStage::Idle;
    }

    /// Perform the delete. Returns `true` when the caller should
    /// navigate back to the list.
    ///
    /// Outside the confirming stage, or while a delete is already in
    /// flight, this is a no-op. A note some other action already
    /// removed counts as deleted.
    pub async fn confirm_delete<C: NoteCollection>(
        &mut self,
        store: &NoteStore<C>,
    ) -> Result<bool> {
        if self.stage != DeleteStage::Confirming || self.busy {
            return Ok(false);
        }

        self.busy = true;
        let result = store.delete(&self.note.id).await;
        self.busy = false;

        match result {
            Ok(()) | Err(Error::NotFound(_)) => {
                self.stage = DeleteStage::Idle;
                Ok(true)
            }
            Err(error) => {
                self.stage = DeleteStage::Idle;
                Err(error)
            }
        }
    }
}
