use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use memo_core::collection::MemoryCollection;
use memo_core::session::{AuthGate, StaticSessionProvider};
use memo_core::{Error, NoteStore, UserId};

use crate::commands::add::run_add;
use crate::commands::common::{
    format_note, format_note_lines, format_relative_time, normalize_note_identifier,
    normalize_search_query, note_preview, note_to_list_item, sort_newest_first,
};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::error::CliError;

fn store_for(user: &str) -> NoteStore<MemoryCollection> {
    let gate = AuthGate::new(&StaticSessionProvider::signed_in(UserId::from(user)));
    NoteStore::new(MemoryCollection::new(), gate.session())
}

#[tokio::test]
async fn run_add_creates_note_with_joined_content() {
    let store = store_for("u1");

    run_add(
        &store,
        "Groceries",
        &["milk,".to_string(), "eggs".to_string()],
    )
    .await
    .unwrap();

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].content, "milk, eggs");
}

#[tokio::test]
async fn run_add_rejects_blank_title() {
    let store = store_for("u1");

    let error = run_add(&store, "   ", &["content".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Submit(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn run_search_rejects_empty_query() {
    let store = store_for("u1");

    let error = run_search(&store, " \n\t ", false).await.unwrap_err();
    assert!(matches!(error, CliError::EmptySearchQuery));
}

#[tokio::test]
async fn run_edit_replaces_only_given_fields() {
    let store = store_for("u1");
    let note = store.create("Groceries", "milk, eggs").await.unwrap();

    run_edit(&store, note.id.as_str(), Some("Groceries v2"), None)
        .await
        .unwrap();

    let updated = store.get(&note.id).await.unwrap();
    assert_eq!(updated.title, "Groceries v2");
    assert_eq!(updated.content, "milk, eggs");
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn run_edit_missing_note_reports_not_found() {
    let store = store_for("u1");

    let error = run_edit(&store, "missing", None, None).await.unwrap_err();
    assert!(matches!(error, CliError::Core(Error::NotFound(_))));
}

#[tokio::test]
async fn run_delete_removes_note_when_confirmed() {
    let store = store_for("u1");
    let note = store.create("gone soon", "bye").await.unwrap();

    run_delete(&store, note.id.as_str(), true).await.unwrap();

    assert!(matches!(
        store.get(&note.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn run_show_missing_note_reports_not_found() {
    let store = store_for("u1");

    let error = run_show(&store, "missing").await.unwrap_err();
    assert!(matches!(error, CliError::Core(Error::NotFound(_))));
}

#[tokio::test]
async fn foreign_note_is_denied_through_cli_commands() {
    let collection = MemoryCollection::new();
    let owners_gate = AuthGate::new(&StaticSessionProvider::signed_in(UserId::from("u1")));
    let intruders_gate = AuthGate::new(&StaticSessionProvider::signed_in(UserId::from("u2")));
    let owners_store = NoteStore::new(collection.clone(), owners_gate.session());
    let intruders_store = NoteStore::new(collection, intruders_gate.session());

    let note = owners_store.create("private", "mine").await.unwrap();

    let error = run_show(&intruders_store, note.id.as_str())
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Core(Error::PermissionDenied(_))));

    let error = run_delete(&intruders_store, note.id.as_str(), true)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::Core(Error::PermissionDenied(_))));
    assert!(owners_store.get(&note.id).await.is_ok());
}

#[test]
fn normalize_search_query_trims_and_rejects_empty() {
    assert!(normalize_search_query(" \n\t ").is_err());
    assert_eq!(
        normalize_search_query("  exact phrase  ").unwrap(),
        "exact phrase"
    );
}

#[test]
fn normalize_note_identifier_rejects_empty() {
    assert!(matches!(
        normalize_note_identifier(" \n "),
        Err(CliError::EmptyNoteId)
    ));
    assert_eq!(
        normalize_note_identifier("  abc123  ").unwrap(),
        "abc123".to_string()
    );
}

#[tokio::test]
async fn sort_newest_first_orders_by_creation() {
    let store = store_for("u1");
    let first = store.create("first", "a").await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = store.create("second", "b").await.unwrap();

    let mut notes = store.list().await.unwrap();
    sort_newest_first(&mut notes);

    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[1].id, first.id);
}

#[tokio::test]
async fn note_preview_truncates_with_ellipsis() {
    let store = store_for("u1");
    let note = store
        .create("long", "This is a very long sentence that should be shortened")
        .await
        .unwrap();

    assert_eq!(note_preview(&note, 20), "This is a very lo...");
}

#[tokio::test]
async fn format_note_lines_carry_id_and_title() {
    let store = store_for("u1");
    let note = store.create("Groceries", "milk, eggs").await.unwrap();

    let lines = format_note_lines(&store.list().await.unwrap());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(note.id.as_str()));
    assert!(lines[0].contains("Groceries"));
    assert!(lines[0].contains("just now"));
}

#[tokio::test]
async fn format_note_renders_full_content() {
    let store = store_for("u1");
    let note = store
        .create("Reading", "line one\nline two")
        .await
        .unwrap();

    let lines = format_note(&note);
    assert_eq!(lines[0], "Reading");
    assert!(lines[1].contains(note.id.as_str()));
    assert!(lines.contains(&"line one".to_string()));
    assert!(lines.contains(&"line two".to_string()));
}

#[tokio::test]
async fn note_to_list_item_reflects_timestamps() {
    let store = store_for("u1");
    let note = store.create("t", "c").await.unwrap();

    let item = note_to_list_item(&note);
    assert_eq!(item.id, note.id.to_string());
    assert_eq!(item.updated_at, None);

    store.update(&note.id, "t2", "c2").await.unwrap();
    let item = note_to_list_item(&store.get(&note.id).await.unwrap());
    assert_eq!(item.title, "t2");
    assert!(item.updated_at.is_some());
}

#[test]
fn format_relative_time_units() {
    let now = Utc::now();
    assert_eq!(format_relative_time(now - Duration::seconds(30), now), "just now");
    assert_eq!(format_relative_time(now - Duration::minutes(2), now), "2m ago");
    assert_eq!(format_relative_time(now - Duration::hours(2), now), "2h ago");
    assert_eq!(format_relative_time(now - Duration::days(3), now), "3d ago");
}
