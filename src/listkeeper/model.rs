use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListKeeperError;

/// The fixed swatch palette notes can be tagged with.
///
/// Serialized as the hex value so stored data stays compatible with the
/// `#RRGGBB` strings the web client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Green,
    Red,
    Yellow,
    Blue,
    Purple,
}

impl NoteColor {
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Green,
        NoteColor::Red,
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Purple,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            NoteColor::Green => "#D1E7DD",
            NoteColor::Red => "#F8D7DA",
            NoteColor::Yellow => "#FFF3CD",
            NoteColor::Blue => "#CFF4FC",
            NoteColor::Purple => "#E2D9F3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NoteColor::Green => "green",
            NoteColor::Red => "red",
            NoteColor::Yellow => "yellow",
            NoteColor::Blue => "blue",
            NoteColor::Purple => "purple",
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for NoteColor {
    type Err = ListKeeperError;

    /// Accepts either a palette name ("green") or its hex value ("#D1E7DD"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        NoteColor::ALL
            .into_iter()
            .find(|c| c.name() == lowered || c.hex().to_lowercase() == lowered)
            .ok_or_else(|| {
                ListKeeperError::Validation(format!("Unknown note color: {}", s.trim()))
            })
    }
}

impl Serialize for NoteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for NoteColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| {
            D::Error::custom(format!("unknown note color: {}", raw))
        })
    }
}

/// A single note/to-do record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
    pub color: NoteColor,
}

/// A note as entered by the user, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
    pub color: NoteColor,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            due_date,
            is_completed: false,
            color: NoteColor::default(),
        }
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = color;
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// An account record as the authentication service reports it.
///
/// Passwords never appear here; the authenticator keeps digests in its own
/// record type. `token` is only present on the value returned from a
/// successful authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl User {
    /// The name the UI greets the user with: full name, else username,
    /// else email.
    pub fn display_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self
                .username
                .clone()
                .unwrap_or_else(|| self.email.clone()),
        }
    }
}
