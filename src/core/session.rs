use std::path::{Path, PathBuf};

use crate::core::conversation::Conversation;

/// State of one interactive chat session.
pub struct ChatSession {
    pub conversation: Conversation,
    save_dir: PathBuf,
    status: Option<String>,
}

impl ChatSession {
    /// `save_dir` is where `/save` places transcripts given as bare names.
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            conversation: Conversation::new(),
            save_dir: save_dir.into(),
            status: None,
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }
}
