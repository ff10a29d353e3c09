use std::io::{self, Write};

use memo_core::collection::NoteCollection;
use memo_core::views::{CancelToken, DetailView};
use memo_core::{Note, NoteId, NoteStore};

use crate::commands::common::normalize_note_identifier;
use crate::error::CliError;

pub async fn run_delete<C: NoteCollection>(
    store: &NoteStore<C>,
    id: &str,
    skip_confirmation: bool,
) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let note_id = NoteId::from(normalized_id.as_str());
    let Some(mut view) = DetailView::load(store, note_id.clone(), &CancelToken::new()).await?
    else {
        return Ok(());
    };

    view.request_delete();
    if !skip_confirmation && !prompt_confirmation(view.note())? {
        view.cancel_delete();
        println!("Aborted");
        return Ok(());
    }

    if view.confirm_delete(store).await? {
        println!("{note_id}");
    }

    Ok(())
}

fn prompt_confirmation(note: &Note) -> Result<bool, CliError> {
    print!("Delete \"{}\"? [y/N] ", note.title);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
