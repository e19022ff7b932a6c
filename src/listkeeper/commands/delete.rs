use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::NoteStore;

/// Delete by id. Absent ids are reported but not errors, so a retried
/// delete is harmless.
pub fn run(store: &mut NoteStore, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match store.get(id).cloned() {
            Some(note) => {
                store.delete(id);
                result.add_message(CmdMessage::success(format!(
                    "Note deleted (#{}): {}",
                    note.id, note.title
                )));
                result.affected_notes.push(note);
            }
            None => {
                result.add_message(CmdMessage::info(format!("Note #{} was already gone", id)));
            }
        }
    }

    Ok(result)
}
