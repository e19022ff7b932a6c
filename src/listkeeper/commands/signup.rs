use crate::auth::{Authenticator, Registration};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run<A: Authenticator>(auth: &mut A, registration: Registration) -> Result<CmdResult> {
    let user = auth.register(registration)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Account created for {}",
        user.display_name()
    )));
    Ok(result.with_user(user))
}
