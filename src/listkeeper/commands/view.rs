use crate::commands::CmdResult;
use crate::error::{ListKeeperError, Result};
use crate::notes::NoteStore;

pub fn run(store: &NoteStore, ids: &[i64]) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(ids.len());
    for &id in ids {
        let note = store
            .get(id)
            .cloned()
            .ok_or(ListKeeperError::NoteNotFound(id))?;
        listed.push(note);
    }

    Ok(CmdResult::default().with_listed_notes(listed))
}
