//! # Durable Client Storage
//!
//! This module defines the storage abstraction for listkeeper. The
//! [`KeyValueStore`] trait is the Rust rendition of the browser client's
//! durable storage: a flat string-keyed map that survives restarts.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (a real sync service, a database) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - All keys live in a single `data.json` map
//!   - The directory is created lazily on first write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Well-Known Keys
//!
//! - [`USER_KEY`]: the JSON of the currently logged-in [`crate::model::User`],
//!   written on login and removed on logout. Restoring the session at startup
//!   reads this key.
//! - [`NOTES_KEY`]: the JSON array of all notes, rewritten after every
//!   mutating note command.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── data.json           # String map for all keys
//! ├── users.json          # The local authenticator's user directory
//! └── config.json         # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the logged-in user is persisted.
pub const USER_KEY: &str = "user";

/// Key under which the note collection is persisted.
pub const NOTES_KEY: &str = "notes";

/// Abstract interface for durable string storage.
///
/// Implementations must make a written value observable by subsequent `get`
/// calls on the same store, and by a freshly-constructed store over the same
/// backing medium.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` if the key has never been set or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
