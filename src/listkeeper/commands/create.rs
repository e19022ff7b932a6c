use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::notes::NoteStore;

pub fn run(store: &mut NoteStore, draft: NoteDraft) -> Result<CmdResult> {
    let note = store.add(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created (#{}): {}",
        note.id, note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListKeeperError;
    use crate::model::NoteDraft;
    use chrono::{Duration, Utc};

    #[test]
    fn creates_a_note() {
        let mut store = NoteStore::new();
        let draft = NoteDraft::new("Water the plants", "Ferns and succulents", Utc::now());

        let result = run(&mut store, draft).unwrap();
        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].id, 1);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn rejects_blank_titles() {
        let mut store = NoteStore::new();
        let draft = NoteDraft::new("", "content", Utc::now() + Duration::days(1));

        assert!(matches!(
            run(&mut store, draft),
            Err(ListKeeperError::Validation(_))
        ));
        assert!(store.is_empty());
    }
}
