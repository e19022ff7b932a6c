//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all listkeeper operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Hydrates** the in-memory note collection and session from durable
//!   storage at construction time
//! - **Persists** them back after every mutating call
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout, stderr, or formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over Its Collaborators
//!
//! `ListKeeperApi<S: KeyValueStore, A: Authenticator>` is generic over both
//! external seams:
//! - Production: `ListKeeperApi<FileStore, DirectoryAuthenticator>`
//! - Testing: `ListKeeperApi<InMemoryStore, DirectoryAuthenticator>`
//!
//! This enables testing the full stack without touching the filesystem or a
//! network.

use chrono::NaiveDate;

use crate::auth::{Authenticator, Registration};
use crate::commands;
use crate::commands::list::NoteFilter;
use crate::commands::{CmdResult, NoteUpdate};
use crate::error::Result;
use crate::model::{NoteDraft, User};
use crate::notes::NoteStore;
use crate::session::UserSession;
use crate::storage::{KeyValueStore, NOTES_KEY};

/// The main API facade for listkeeper operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct ListKeeperApi<S: KeyValueStore, A: Authenticator> {
    storage: S,
    auth: A,
    notes: NoteStore,
    session: UserSession,
}

impl<S: KeyValueStore, A: Authenticator> ListKeeperApi<S, A> {
    /// Build the facade, restoring notes and session from storage. A corrupt
    /// session record falls back to logged-out rather than failing startup.
    pub fn new(storage: S, auth: A) -> Result<Self> {
        let notes = match storage.get(NOTES_KEY)? {
            Some(raw) => NoteStore::from_notes(serde_json::from_str(&raw)?),
            None => NoteStore::new(),
        };
        let session = UserSession::restore(&storage).unwrap_or_default();

        Ok(Self {
            storage,
            auth,
            notes,
            session,
        })
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.notes, draft)?;
        self.persist_notes()?;
        Ok(result)
    }

    pub fn list_notes(&self, filter: &NoteFilter, today: NaiveDate) -> Result<CmdResult> {
        commands::list::run(&self.notes, filter, today)
    }

    pub fn view_notes(&self, ids: &[i64]) -> Result<CmdResult> {
        commands::view::run(&self.notes, ids)
    }

    pub fn update_notes(&mut self, updates: &[NoteUpdate]) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.notes, updates)?;
        self.persist_notes()?;
        Ok(result)
    }

    pub fn complete_notes(&mut self, ids: &[i64]) -> Result<CmdResult> {
        let result = commands::complete::run(&mut self.notes, ids)?;
        self.persist_notes()?;
        Ok(result)
    }

    pub fn delete_notes(&mut self, ids: &[i64]) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.notes, ids)?;
        self.persist_notes()?;
        Ok(result)
    }

    pub fn seed_notes(&mut self) -> Result<CmdResult> {
        let result = commands::seed::run(&mut self.notes)?;
        self.persist_notes()?;
        Ok(result)
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        commands::login::run(
            &mut self.storage,
            &mut self.session,
            &self.auth,
            username,
            password,
        )
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::logout::run(&mut self.storage, &mut self.session)
    }

    pub fn signup(&mut self, registration: Registration) -> Result<CmdResult> {
        commands::signup::run(&mut self.auth, registration)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Attach a subscriber to the session broadcaster (replay-one).
    pub fn subscribe_user<F>(&mut self, subscriber: F)
    where
        F: FnMut(Option<&User>) + 'static,
    {
        self.session.subscribe(subscriber);
    }

    pub fn users(&self) -> Result<CmdResult> {
        Ok(CmdResult::default().with_users(self.auth.users()?))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist_notes(&mut self) -> Result<()> {
        let raw = serde_json::to_string(self.notes.list())?;
        self.storage.set(NOTES_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::DirectoryAuthenticator;
    use crate::storage::memory::InMemoryStore;
    use crate::storage::USER_KEY;
    use chrono::{Duration, Local, Utc};

    fn api() -> ListKeeperApi<InMemoryStore, DirectoryAuthenticator> {
        ListKeeperApi::new(InMemoryStore::new(), DirectoryAuthenticator::in_memory()).unwrap()
    }

    fn registration(username: &str) -> Registration {
        Registration {
            email: format!("{}@example.com", username),
            username: username.to_string(),
            firstname: "Sam".to_string(),
            lastname: "Carter".to_string(),
            phone: None,
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn create_persists_notes_to_storage() {
        let mut api = api();
        api.create_note(NoteDraft::new(
            "Buy tickets",
            "On sale Friday at 10 AM",
            Utc::now() + Duration::days(2),
        ))
        .unwrap();

        let raw = api.storage().get(NOTES_KEY).unwrap().unwrap();
        assert!(raw.contains("Buy tickets"));
    }

    #[test]
    fn notes_survive_reconstruction_over_the_same_storage() {
        let mut first = api();
        first
            .create_note(NoteDraft::new(
                "Persistent",
                "content",
                Utc::now() + Duration::days(1),
            ))
            .unwrap();

        let storage = first.storage().clone();
        let second =
            ListKeeperApi::new(storage, DirectoryAuthenticator::in_memory()).unwrap();
        let listed = second
            .list_notes(&NoteFilter::default(), Local::now().date_naive())
            .unwrap();
        assert_eq!(listed.listed_notes.len(), 1);
        assert_eq!(listed.listed_notes[0].title, "Persistent");
    }

    #[test]
    fn signup_then_login_round_trip() {
        let mut api = api();
        api.signup(registration("sam")).unwrap();

        assert!(api.current_user().is_none());
        api.login("sam", "hunter22").unwrap();
        assert_eq!(
            api.current_user().unwrap().username.as_deref(),
            Some("sam")
        );

        api.logout().unwrap();
        assert!(api.current_user().is_none());
        assert!(api.storage().get(USER_KEY).unwrap().is_none());
    }

    #[test]
    fn complete_and_delete_flow_through_to_storage() {
        let mut api = api();
        api.create_note(NoteDraft::new(
            "Chore",
            "content",
            Utc::now() + Duration::days(1),
        ))
        .unwrap();

        api.complete_notes(&[1]).unwrap();
        assert!(api
            .storage()
            .get(NOTES_KEY)
            .unwrap()
            .unwrap()
            .contains("\"isCompleted\":true"));

        api.delete_notes(&[1]).unwrap();
        assert_eq!(api.storage().get(NOTES_KEY).unwrap().unwrap(), "[]");
    }

    #[test]
    fn view_and_users_are_read_only_lookups() {
        let mut api = api();
        api.signup(registration("sam")).unwrap();
        api.create_note(NoteDraft::new(
            "Only note",
            "content",
            Utc::now() + Duration::days(1),
        ))
        .unwrap();

        let viewed = api.view_notes(&[1]).unwrap();
        assert_eq!(viewed.listed_notes[0].title, "Only note");

        let users = api.users().unwrap();
        assert_eq!(users.users.len(), 1);
        assert_eq!(users.users[0].username.as_deref(), Some("sam"));
    }

    #[test]
    fn corrupt_session_record_falls_back_to_logged_out() {
        let mut storage = InMemoryStore::new();
        storage.set(USER_KEY, "not json").unwrap();

        let api = ListKeeperApi::new(storage, DirectoryAuthenticator::in_memory()).unwrap();
        assert!(api.current_user().is_none());
    }
}
