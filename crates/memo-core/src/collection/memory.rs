//! In-memory `NoteCollection`, primarily for tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{NoteCollection, NotePatch};
use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId, UserId};

/// Shared in-memory document map behaving like the remote collection:
/// it assigns ids and creation timestamps on insert. Clones share the
/// same underlying map.
#[derive(Clone, Default)]
pub struct MemoryCollection {
    documents: Arc<Mutex<HashMap<NoteId, Note>>>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents, across all owners.
    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.lock().await.is_empty()
    }
}

impl NoteCollection for MemoryCollection {
    async fn insert(&self, draft: &NoteDraft, owner: &UserId) -> Result<Note> {
        let note = Note {
            id: NoteId::new(Uuid::now_v7().to_string()),
            title: draft.title().to_string(),
            content: draft.content().to_string(),
            owner_id: owner.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let mut documents = self.documents.lock().await;
        documents.insert(note.id.clone(), note.clone());
        Ok(note)
    }

    async fn fetch(&self, id: &NoteId) -> Result<Option<Note>> {
        let documents = self.documents.lock().await;
        Ok(documents.get(id).cloned())
    }

    async fn query_by_owner(&self, owner: &UserId) -> Result<Vec<Note>> {
        let documents = self.documents.lock().await;
        Ok(documents
            .values()
            .filter(|note| note.is_owned_by(owner))
            .cloned()
            .collect())
    }

    async fn merge(&self, id: &NoteId, patch: &NotePatch) -> Result<()> {
        let mut documents = self.documents.lock().await;
        let note = documents
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        note.title = patch.title.clone();
        note.content = patch.content.clone();
        note.updated_at = Some(patch.updated_at);
        Ok(())
    }

    async fn remove(&self, id: &NoteId) -> Result<()> {
        let mut documents = self.documents.lock().await;
        documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft::new(title, content).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let collection = MemoryCollection::new();
        let note = collection
            .insert(&draft("Groceries", "milk, eggs"), &UserId::from("u1"))
            .await
            .unwrap();

        assert!(!note.id.as_str().is_empty());
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.owner_id, UserId::from("u1"));
        assert_eq!(note.updated_at, None);
    }

    #[tokio::test]
    async fn test_clones_share_documents() {
        let collection = MemoryCollection::new();
        let clone = collection.clone();

        let note = clone
            .insert(&draft("a", "b"), &UserId::from("u1"))
            .await
            .unwrap();

        let fetched = collection.fetch(&note.id).await.unwrap();
        assert_eq!(fetched, Some(note));
    }

    #[tokio::test]
    async fn test_query_by_owner_is_scoped() {
        let collection = MemoryCollection::new();
        collection
            .insert(&draft("mine", "x"), &UserId::from("u1"))
            .await
            .unwrap();
        collection
            .insert(&draft("theirs", "y"), &UserId::from("u2"))
            .await
            .unwrap();

        let mine = collection.query_by_owner(&UserId::from("u1")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }

    #[tokio::test]
    async fn test_merge_missing_is_not_found() {
        let collection = MemoryCollection::new();
        let patch = NotePatch {
            title: "t".to_string(),
            content: "c".to_string(),
            updated_at: Utc::now(),
        };

        let result = collection.merge(&NoteId::from("missing"), &patch).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() {
        let collection = MemoryCollection::new();
        let result = collection.remove(&NoteId::from("missing")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
