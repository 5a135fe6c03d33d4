use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::message::Message;

/// Append-only log of one interactive session.
#[derive(Debug, Default, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn reset(&mut self) {
        self.messages.clear();
    }

    /// Write the log as `Role: content` blocks, each followed by a blank line.
    pub fn write_transcript<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for message in &self.messages {
            writeln!(writer, "{}: {}", message.role.label(), message.content)?;
            writeln!(writer)?;
        }
        Ok(())
    }

    pub fn save_transcript(&self, path: &Path) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_transcript(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push(Message::user("Hello"));
        conversation.push(Message::assistant("Hi there!\nHow can I help?"));
        conversation
    }

    #[test]
    fn transcript_uses_role_labels_and_blank_separators() {
        let mut out = Vec::new();
        sample().write_transcript(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "User: Hello\n\nAssistant: Hi there!\nHow can I help?\n\n"
        );
    }

    #[test]
    fn reset_clears_the_log() {
        let mut conversation = sample();
        assert_eq!(conversation.len(), 2);
        conversation.reset();
        assert!(conversation.is_empty());
    }

    #[test]
    fn save_transcript_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat.txt");

        sample().save_transcript(&path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("User: Hello\n\n"));
    }
}
