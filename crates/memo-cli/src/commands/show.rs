use memo_core::collection::NoteCollection;
use memo_core::views::{CancelToken, DetailView};
use memo_core::{NoteId, NoteStore};

use crate::commands::common::{format_note, normalize_note_identifier};
use crate::error::CliError;

pub async fn run_show<C: NoteCollection>(store: &NoteStore<C>, id: &str) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let Some(view) = DetailView::load(
        store,
        NoteId::from(normalized_id.as_str()),
        &CancelToken::new(),
    )
    .await?
    else {
        return Ok(());
    };

    for line in format_note(view.note()) {
        println!("{line}");
    }

    Ok(())
}
