use crate::commands::registry::CommandInvocation;
use crate::commands::{all_commands, CommandResult};
use crate::core::session::ChatSession;

pub(crate) fn handle_help(
    session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    let mut help = String::from("Commands:");
    for command in all_commands() {
        help.push_str(&format!("\n  {:<18}{}", command.usage, command.help));
    }
    session.set_status(help);
    CommandResult::Continue
}

pub(crate) fn handle_reset(
    session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    session.conversation.reset();
    session.set_status("Conversation reset");
    CommandResult::Continue
}

pub(crate) fn handle_exit(
    _session: &mut ChatSession,
    _invocation: CommandInvocation<'_>,
) -> CommandResult {
    CommandResult::Exit
}
