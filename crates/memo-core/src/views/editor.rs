//! Note editor: create and edit modes sharing one submit contract.

use super::CancelToken;
use crate::collection::NoteCollection;
use crate::error::Result;
use crate::models::{NoteDraft, NoteId};
use crate::store::NoteStore;

/// Which persist operation `submit` performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(NoteId),
}

/// Result of a submit attempt. `Saved` means navigate to the list;
/// `Rejected` means the form stays up with its current values and an
/// inline error where one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(NoteId),
    Rejected,
}

/// Form state for creating or editing a single note.
pub struct Editor {
    mode: EditorMode,
    title: String,
    content: String,
    busy: bool,
    error: Option<String>,
}

impl Editor {
    /// Empty form in create mode.
    #[must_use]
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            busy: false,
            error: None,
        }
    }

    /// Edit mode: fetch the note and pre-fill the fields.
    ///
    /// A failed fetch fails the constructor, so the form is never shown
    /// in an unusable state. `Ok(None)` means the token was cancelled
    /// while the fetch was in flight and the result was discarded.
    pub async fn edit<C: NoteCollection>(
        store: &NoteStore<C>,
        id: NoteId,
        cancel: &CancelToken,
    ) -> Result<Option<Self>> {
        let note = store.get(&id).await?;
        if cancel.is_cancelled() {
            tracing::debug!(id = %id, "editor load finished after teardown; discarding");
            return Ok(None);
        }

        Ok(Some(Self {
            mode: EditorMode::Edit(id),
            title: note.title,
            content: note.content,
            busy: false,
            error: None,
        }))
    }

    #[must_use]
    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Inline error from the last rejected submit, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Validate and persist.
    ///
    /// Empty fields are rejected before any network call, with the
    /// entered text preserved. While a submission is in flight the busy
    /// flag rejects a second one from the same form instance.
    pub async fn submit<C: NoteCollection>(&mut self, store: &NoteStore<C>) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Rejected;
        }
        if let Err(error) = NoteDraft::new(&self.title, &self.content) {
            self.error = Some(error.to_string());
            return SubmitOutcome::Rejected;
        }

        self.busy = true;
        let result = match self.mode.clone() {
            EditorMode::Create => store
                .create(&self.title, &self.content)
                .await
                .map(|note| note.id),
            EditorMode::Edit(id) => store
                .update(&id, &self.title, &self.content)
                .await
                .map(|()| id),
        };
        self.busy = false;

        match result {
            Ok(id) => {
                self.error = None;
                SubmitOutcome::Saved(id)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                SubmitOutcome::Rejected
            }
        }
    }
}
