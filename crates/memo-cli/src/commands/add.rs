use memo_core::collection::NoteCollection;
use memo_core::views::{Editor, SubmitOutcome};
use memo_core::NoteStore;

use crate::commands::common::submit_rejection;
use crate::error::CliError;

pub async fn run_add<C: NoteCollection>(
    store: &NoteStore<C>,
    title: &str,
    content_parts: &[String],
) -> Result<(), CliError> {
    let mut editor = Editor::create();
    editor.set_title(title);
    editor.set_content(content_parts.join(" "));

    match editor.submit(store).await {
        SubmitOutcome::Saved(id) => {
            println!("{id}");
            Ok(())
        }
        SubmitOutcome::Rejected => Err(submit_rejection(&editor)),
    }
}
