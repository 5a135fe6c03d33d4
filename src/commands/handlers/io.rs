use super::usage_status;
use crate::commands::registry::CommandInvocation;
use crate::commands::CommandResult;
use crate::core::config::data::path_display;
use crate::core::session::ChatSession;
use crate::output::timestamped_name;
use chrono::Local;
use tracing::debug;

const USAGE_SAVE: &str = "Usage: /save [filename]";

/// Prefix of transcript files saved without an explicit name.
pub const CHAT_TRANSCRIPT_PREFIX: &str = "seek_chat";

pub(crate) fn handle_save(
    session: &mut ChatSession,
    invocation: CommandInvocation<'_>,
) -> CommandResult {
    let filename = match invocation.args_len() {
        0 => format!("{}.txt", timestamped_name(CHAT_TRANSCRIPT_PREFIX, Local::now())),
        1 => match invocation.arg(0) {
            Some(name) => name.to_string(),
            None => return usage_status(session, USAGE_SAVE),
        },
        _ => return usage_status(session, USAGE_SAVE),
    };

    let path = session.save_dir().join(&filename);
    debug!(path = %path.display(), messages = session.conversation.len(), "saving transcript");
    match session.conversation.save_transcript(&path) {
        Ok(()) => session.set_status(format!("✅ Conversation saved as {}", path_display(&path))),
        Err(e) => session.set_status(format!("❌ Save error: {e}")),
    }
    CommandResult::Continue
}
