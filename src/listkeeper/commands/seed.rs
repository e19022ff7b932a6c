use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::{sample_notes, NoteStore};

/// Fill an empty store with the demo collection. A store that already has
/// notes is left alone.
pub fn run(store: &mut NoteStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !store.is_empty() {
        result.add_message(CmdMessage::warning(
            "Store already contains notes; seed skipped",
        ));
        return Ok(result);
    }

    let notes = sample_notes();
    let count = notes.len();
    *store = NoteStore::from_notes(notes);

    result.add_message(CmdMessage::success(format!("Seeded {} sample notes", count)));
    Ok(result)
}
