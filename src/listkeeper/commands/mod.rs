use chrono::{DateTime, Utc};

use crate::config::ListKeeperConfig;
use crate::model::{Note, NoteColor, User};

pub mod complete;
pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod logout;
pub mod seed;
pub mod signup;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result every command returns; the CLI turns this into output.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub user: Option<User>,
    pub users: Vec<User>,
    pub config: Option<ListKeeperConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_config(mut self, config: ListKeeperConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A full replacement for one note, matched by id.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
    pub color: NoteColor,
}

impl NoteUpdate {
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            due_date: note.due_date,
            is_completed: note.is_completed,
            color: note.color,
        }
    }
}
