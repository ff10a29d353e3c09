use chrono::{DateTime, Utc};
use serde::Serialize;

use memo_core::collection::RestCollection;
use memo_core::session::AuthGate;
use memo_core::views::Editor;
use memo_core::{Note, NoteStore};

use crate::auth::SessionStore;
use crate::config::ProfilesConfig;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub relative_time: String,
}

/// Build a store over the remote collection for the resolved profile.
///
/// Fails with `NotConfigured` until `memo config init` has run, and
/// with `NotSignedIn` until `memo auth login` has stored a session.
pub fn open_store(profile_flag: Option<&str>) -> Result<NoteStore<RestCollection>, CliError> {
    let config = ProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_flag);
    let Some(profile) = config.profile(&profile_name) else {
        return Err(CliError::NotConfigured);
    };
    let (Some(api_url), Some(api_key)) = (profile.api_url(), profile.api_key()) else {
        return Err(CliError::NotConfigured);
    };

    let Some(session) = SessionStore::for_profile(&profile_name).load()? else {
        return Err(CliError::NotSignedIn);
    };

    let collection = RestCollection::new(api_url, api_key)?
        .with_access_token(session.access_token.clone());
    let gate = AuthGate::new(&session.provider());

    Ok(NoteStore::new(collection, gate.session()))
}

/// Newest first. The remote collection imposes no order of its own.
pub fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now = Utc::now();
    notes
        .iter()
        .map(|note| {
            let title = clip(&note.title, 32);
            let preview = note_preview(note, 40);
            let relative_time = format_relative_time(last_touched(note), now);
            format!("{}  {title:<32}  {preview:<40}  {relative_time}", note.id)
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    let now = Utc::now();
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        preview: note_preview(note, 80),
        content: note.content.clone(),
        created_at: note.created_at.to_rfc3339(),
        updated_at: note.updated_at.map(|at| at.to_rfc3339()),
        relative_time: format_relative_time(last_touched(note), now),
    }
}

/// Full rendering for `memo show`.
pub fn format_note(note: &Note) -> Vec<String> {
    let mut lines = vec![
        note.title.clone(),
        format!("id: {}", note.id),
        format!("created: {}", format_timestamp(note.created_at)),
    ];
    if let Some(updated_at) = note.updated_at {
        lines.push(format!("updated: {}", format_timestamp(updated_at)));
    }
    lines.push(String::new());
    lines.extend(note.content.lines().map(str::to_string));
    lines
}

pub fn note_preview(note: &Note, max_chars: usize) -> String {
    let first_line = note.content.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");
    clip(&collapsed, max_chars)
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = text.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

fn last_touched(note: &Note) -> DateTime<Utc> {
    note.updated_at.unwrap_or(note.created_at)
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(at).num_milliseconds().max(0);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

/// Turn an editor rejection into the CLI's save error, carrying the
/// inline message when one is set.
pub fn submit_rejection(editor: &Editor) -> CliError {
    CliError::Submit(
        editor
            .error()
            .unwrap_or("submission rejected")
            .to_string(),
    )
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}
