//! Note list view: authoritative local set plus a derived, filtered
//! projection.

use super::CancelToken;
use crate::collection::NoteCollection;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::store::NoteStore;

/// View-scoped projection of the current user's notes.
///
/// The full set is loaded once on activation and mutated locally on
/// delete; the filtered set is recomputed whenever the set or the
/// query changes. There is no background refresh.
#[derive(Default)]
pub struct ListView {
    notes: Vec<Note>,
    query: String,
    filtered: Vec<Note>,
    pending_delete: Option<NoteId>,
}

impl ListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the owner's notes and make them the local set.
    ///
    /// A load whose token was cancelled while the fetch was in flight
    /// leaves the view untouched.
    pub async fn load<C: NoteCollection>(
        &mut self,
        store: &NoteStore<C>,
        cancel: &CancelToken,
    ) -> Result<()> {
        let notes = store.list().await?;
        if cancel.is_cancelled() {
            tracing::debug!("list load finished after teardown; discarding");
            return Ok(());
        }

        self.notes = notes;
        self.refilter();
        Ok(())
    }

    /// Full local set, unfiltered.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Filtered projection: case-insensitive substring match against
    /// title or content; the empty query matches everything.
    #[must_use]
    pub fn filtered(&self) -> &[Note] {
        &self.filtered
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// First step of deletion: remember the target and wait for
    /// confirmation.
    pub fn request_delete(&mut self, id: NoteId) {
        self.pending_delete = Some(id);
    }

    /// Abandon the pending deletion without mutating anything.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&NoteId> {
        self.pending_delete.as_ref()
    }

    /// Second step: perform the store delete and drop the note from
    /// the local set immediately, keeping the visible list consistent
    /// without a re-fetch.
    ///
    /// A note some other action already removed counts as deleted.
    pub async fn confirm_delete<C: NoteCollection>(
        &mut self,
        store: &NoteStore<C>,
    ) -> Result<()> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(());
        };

        match store.delete(&id).await {
            Ok(()) | Err(Error::NotFound(_)) => {
                self.notes.retain(|note| note.id != id);
                self.refilter();
                Ok(())
            }
            Err(error) => {
                self.pending_delete = Some(id);
                Err(error)
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered = self
            .notes
            .iter()
            .filter(|note| note.matches(&self.query))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::collection::MemoryCollection;
    use crate::models::UserId;
    use crate::session::{AuthGate, StaticSessionProvider};

    async fn seeded_store() -> NoteStore<MemoryCollection> {
        let gate = AuthGate::new(&StaticSessionProvider::signed_in(UserId::from("u1")));
        let store = NoteStore::new(MemoryCollection::new(), gate.session());
        store.create("Groceries", "milk, eggs").await.unwrap();
        store.create("Workout", "run 5k").await.unwrap();
        store.create("Reading", "finish the milk chapter").await.unwrap();
        store
    }

    async fn loaded_view(store: &NoteStore<MemoryCollection>) -> ListView {
        let mut view = ListView::new();
        view.load(store, &CancelToken::new()).await.unwrap();
        view
    }

    #[tokio::test]
    async fn test_load_populates_full_projection() {
        let store = seeded_store().await;
        let view = loaded_view(&store).await;

        assert_eq!(view.notes().len(), 3);
        assert_eq!(view.filtered().len(), 3);
    }

    #[tokio::test]
    async fn test_filter_matches_title_or_content() {
        let store = seeded_store().await;
        let mut view = loaded_view(&store).await;

        view.set_query("MILK");
        let titles: Vec<&str> = view.filtered().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"Groceries"));
        assert!(titles.contains(&"Reading"));
    }

    #[tokio::test]
    async fn test_filter_is_idempotent_and_empty_query_matches_all() {
        let store = seeded_store().await;
        let mut view = loaded_view(&store).await;

        view.set_query("");
        assert_eq!(view.filtered().len(), view.notes().len());

        view.set_query("milk");
        let once: Vec<NoteId> = view.filtered().iter().map(|n| n.id.clone()).collect();
        view.set_query("milk");
        let twice: Vec<NoteId> = view.filtered().iter().map(|n| n.id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_exactly_one_locally() {
        let store = seeded_store().await;
        let mut view = loaded_view(&store).await;

        let target = view.notes()[0].clone();
        let kept: Vec<Note> = view.notes()[1..].to_vec();

        view.request_delete(target.id.clone());
        view.confirm_delete(&store).await.unwrap();

        assert_eq!(view.notes().len(), 2);
        assert!(view.notes().iter().all(|note| note.id != target.id));
        // Survivors untouched, field by field
        for survivor in kept {
            assert_eq!(
                view.notes().iter().find(|n| n.id == survivor.id),
                Some(&survivor)
            );
        }
    }

    #[tokio::test]
    async fn test_cancel_delete_mutates_nothing() {
        let store = seeded_store().await;
        let mut view = loaded_view(&store).await;

        let target = view.notes()[0].id.clone();
        view.request_delete(target.clone());
        view.cancel_delete();
        assert_eq!(view.pending_delete(), None);

        view.confirm_delete(&store).await.unwrap();
        assert_eq!(view.notes().len(), 3);
        assert!(store.get(&target).await.is_ok());
    }

    #[tokio::test]
    async fn test_note_already_deleted_elsewhere_counts_as_deleted() {
        let store = seeded_store().await;
        let mut view = loaded_view(&store).await;

        let target = view.notes()[0].id.clone();
        store.delete(&target).await.unwrap();

        view.request_delete(target.clone());
        view.confirm_delete(&store).await.unwrap();
        assert!(view.notes().iter().all(|note| note.id != target));
    }

    #[tokio::test]
    async fn test_cancelled_load_discards_result() {
        let store = seeded_store().await;
        let mut view = ListView::new();

        let token = CancelToken::new();
        token.cancel();
        view.load(&store, &token).await.unwrap();

        assert!(view.notes().is_empty());
        assert!(view.filtered().is_empty());
    }
}
