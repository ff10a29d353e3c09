use memo_core::collection::NoteCollection;
use memo_core::views::{CancelToken, ListView};
use memo_core::NoteStore;

use crate::commands::common::{
    format_note_lines, normalize_search_query, note_to_list_item, sort_newest_first, NoteListItem,
};
use crate::error::CliError;

pub async fn run_search<C: NoteCollection>(
    store: &NoteStore<C>,
    query: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;

    let mut view = ListView::new();
    view.load(store, &CancelToken::new()).await?;
    view.set_query(normalized_query);

    let mut notes = view.filtered().to_vec();
    sort_newest_first(&mut notes);

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
