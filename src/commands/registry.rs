use super::CommandResult;
use crate::core::session::ChatSession;

pub type CommandHandler = fn(&mut ChatSession, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub args: &'a str,
}

impl<'a> CommandInvocation<'a> {
    pub fn args_len(&self) -> usize {
        self.args.split_whitespace().count()
    }

    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.split_whitespace().nth(index)
    }
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands.",
        handler: super::handlers::core::handle_help,
    },
    Command {
        name: "save",
        usage: "/save [filename]",
        help: "Save the conversation to a text file.",
        handler: super::handlers::io::handle_save,
    },
    Command {
        name: "reset",
        usage: "/reset",
        help: "Start a new conversation.",
        handler: super::handlers::core::handle_reset,
    },
    Command {
        name: "exit",
        usage: "/exit",
        help: "Leave the chat.",
        handler: super::handlers::core::handle_exit,
    },
];
