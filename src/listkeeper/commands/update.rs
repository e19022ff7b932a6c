use crate::commands::{CmdMessage, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::model::Note;
use crate::notes::NoteStore;

pub fn run(store: &mut NoteStore, updates: &[NoteUpdate]) -> Result<CmdResult> {
    if updates.is_empty() {
        return Ok(CmdResult::default());
    }

    let mut result = CmdResult::default();

    for update in updates {
        let note = Note {
            id: update.id,
            title: update.title.clone(),
            content: update.content.clone(),
            due_date: update.due_date,
            is_completed: update.is_completed,
            color: update.color,
        };
        store.update(note.clone())?;

        result.add_message(CmdMessage::success(format!(
            "Note updated (#{}): {}",
            note.id, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
