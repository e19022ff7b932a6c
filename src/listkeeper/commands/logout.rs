use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::UserSession;
use crate::storage::{KeyValueStore, USER_KEY};

/// Clear the session and the persisted user. Safe to call when already
/// logged out.
pub fn run<S: KeyValueStore>(storage: &mut S, session: &mut UserSession) -> Result<CmdResult> {
    session.clear();
    storage.remove(USER_KEY)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Logged out."));
    Ok(result)
}
