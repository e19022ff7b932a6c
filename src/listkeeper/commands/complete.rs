use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ListKeeperError, Result};
use crate::notes::NoteStore;

/// Toggle the completed flag on each note.
pub fn run(store: &mut NoteStore, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let mut note = store
            .get(id)
            .cloned()
            .ok_or(ListKeeperError::NoteNotFound(id))?;
        note.is_completed = !note.is_completed;
        store.update(note.clone())?;

        let verb = if note.is_completed {
            "completed"
        } else {
            "reopened"
        };
        result.add_message(CmdMessage::success(format!(
            "Note {} (#{}): {}",
            verb, note.id, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
