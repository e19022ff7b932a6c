use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListKeeperError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ListKeeperError>;
