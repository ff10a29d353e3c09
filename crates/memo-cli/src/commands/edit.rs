use memo_core::collection::NoteCollection;
use memo_core::views::{CancelToken, Editor, SubmitOutcome};
use memo_core::{NoteId, NoteStore};

use crate::commands::common::{normalize_note_identifier, submit_rejection};
use crate::error::CliError;

pub async fn run_edit<C: NoteCollection>(
    store: &NoteStore<C>,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<(), CliError> {
    let normalized_id = normalize_note_identifier(id)?;
    let Some(mut editor) = Editor::edit(
        store,
        NoteId::from(normalized_id.as_str()),
        &CancelToken::new(),
    )
    .await?
    else {
        return Ok(());
    };

    // Fields left off the command line keep their loaded values
    if let Some(title) = title {
        editor.set_title(title);
    }
    if let Some(content) = content {
        editor.set_content(content);
    }

    match editor.submit(store).await {
        SubmitOutcome::Saved(id) => {
            println!("{id}");
            Ok(())
        }
        SubmitOutcome::Rejected => Err(submit_rejection(&editor)),
    }
}
