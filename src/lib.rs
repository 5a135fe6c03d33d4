//! Seek is a command-line client for DeepSeek-compatible chat-completion APIs.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns configuration, transcript messages, the in-memory
//!   conversation log, and the completion client.
//! - [`output`] splits a reply into prose and fenced code segments and
//!   materializes them as files, optionally bundled into archives.
//! - [`commands`] implements slash-directive parsing and execution used by the
//!   interactive chat loop.
//! - [`api`] defines the chat-completion payloads exchanged with the endpoint.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which dispatches into one-shot query mode,
//! the `config` subcommand, or the interactive `chat` loop.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod output;
pub mod utils;
