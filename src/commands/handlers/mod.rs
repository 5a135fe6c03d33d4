pub(super) mod core;
pub(super) mod io;

use crate::commands::CommandResult;
use crate::core::session::ChatSession;

pub(super) fn usage_status(session: &mut ChatSession, usage: &'static str) -> CommandResult {
    session.set_status(usage);
    CommandResult::Continue
}
