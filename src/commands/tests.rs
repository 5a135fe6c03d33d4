use super::*;
use crate::core::message::Message;
use std::fs;
use tempfile::tempdir;

fn session_with_history(dir: &std::path::Path) -> ChatSession {
    let mut session = ChatSession::new(dir);
    session.conversation.push(Message::user("Hello"));
    session.conversation.push(Message::assistant("Hi there!"));
    session
}

#[test]
fn plain_text_is_processed_as_message() {
    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(dir.path());

    match process_input(&mut session, "What is Rust?") {
        CommandResult::ProcessAsMessage(text) => assert_eq!(text, "What is Rust?"),
        _ => panic!("expected prompt"),
    }
}

#[test]
fn unknown_directive_is_processed_as_message() {
    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(dir.path());

    match process_input(&mut session, "/unknown thing") {
        CommandResult::ProcessAsMessage(text) => assert_eq!(text, "/unknown thing"),
        _ => panic!("expected prompt"),
    }
    assert!(matches!(
        process_input(&mut session, "/"),
        CommandResult::ProcessAsMessage(_)
    ));
}

#[test]
fn exit_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(dir.path());

    for input in ["/exit", "/EXIT", "  /Exit  "] {
        assert!(
            matches!(process_input(&mut session, input), CommandResult::Exit),
            "input {input:?}"
        );
    }
}

#[test]
fn reset_clears_conversation() {
    let dir = tempdir().unwrap();
    let mut session = session_with_history(dir.path());

    let result = process_input(&mut session, "/reset");

    assert!(matches!(result, CommandResult::Continue));
    assert!(session.conversation.is_empty());
    assert_eq!(session.take_status().as_deref(), Some("Conversation reset"));
}

#[test]
fn save_with_filename_writes_transcript() {
    let dir = tempdir().unwrap();
    let mut session = session_with_history(dir.path());

    let result = process_input(&mut session, "/save chat.txt");

    assert!(matches!(result, CommandResult::Continue));
    let saved = fs::read_to_string(dir.path().join("chat.txt")).unwrap();
    assert_eq!(saved, "User: Hello\n\nAssistant: Hi there!\n\n");
    let status = session.take_status().unwrap();
    assert!(status.starts_with("✅ Conversation saved as "), "{status}");
    assert_eq!(session.conversation.len(), 2);
}

#[test]
fn save_without_filename_uses_timestamp() {
    let dir = tempdir().unwrap();
    let mut session = session_with_history(dir.path());

    process_input(&mut session, "/save");

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    let name = &names[0];
    assert!(name.starts_with("seek_chat_") && name.ends_with(".txt"), "{name}");
    // seek_chat_YYYYMMDD_HHMMSS.txt
    assert_eq!(name.len(), "seek_chat_".len() + 15 + ".txt".len());
}

#[test]
fn save_with_too_many_args_shows_usage() {
    let dir = tempdir().unwrap();
    let mut session = session_with_history(dir.path());

    process_input(&mut session, "/save a b");

    assert_eq!(
        session.take_status().as_deref(),
        Some("Usage: /save [filename]")
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_into_missing_directory_reports_error() {
    let dir = tempdir().unwrap();
    let mut session = session_with_history(&dir.path().join("missing"));

    process_input(&mut session, "/save out.txt");

    let status = session.take_status().unwrap();
    assert!(status.starts_with("❌ Save error:"), "{status}");
}

#[test]
fn help_lists_every_command() {
    let dir = tempdir().unwrap();
    let mut session = ChatSession::new(dir.path());

    process_input(&mut session, "/help");

    let help = session.take_status().unwrap();
    for command in all_commands() {
        assert!(help.contains(command.usage), "missing {}", command.usage);
    }
}

#[test]
fn registry_lookup_ignores_case() {
    assert_eq!(find_command("SAVE").map(|c| c.name), Some("save"));
    assert!(find_command("dump").is_none());
}
