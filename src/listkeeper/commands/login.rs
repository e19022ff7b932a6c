use crate::auth::Authenticator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::UserSession;
use crate::storage::{KeyValueStore, USER_KEY};

/// Authenticate and make the user current. On failure the session and the
/// persisted user are left exactly as they were.
pub fn run<S: KeyValueStore, A: Authenticator>(
    storage: &mut S,
    session: &mut UserSession,
    auth: &A,
    username: &str,
    password: &str,
) -> Result<CmdResult> {
    let user = auth.authenticate(username, password)?;

    storage.set(USER_KEY, &serde_json::to_string(&user)?)?;
    session.set_current(user.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {}",
        user.display_name()
    )));
    Ok(result.with_user(user))
}
