use crate::error::Result;
use crate::model::User;
use crate::storage::{KeyValueStore, USER_KEY};

type Subscriber = Box<dyn FnMut(Option<&User>)>;

/// Holds the currently authenticated user and broadcasts changes.
///
/// This is an explicit publish/subscribe register: subscribers are plain
/// callbacks invoked synchronously on every login/logout, and a newly
/// attached subscriber immediately receives the current value (replay-one).
/// Persistence of the `"user"` key is the login/logout commands' job; the
/// session only restores from it at construction time.
#[derive(Default)]
pub struct UserSession {
    current: Option<User>,
    subscribers: Vec<Subscriber>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the session persisted by a previous run. A missing key means
    /// logged out; a corrupt value is a `Serialization` error (callers
    /// typically fall back to a fresh session).
    pub fn restore<S: KeyValueStore>(storage: &S) -> Result<Self> {
        let current = match storage.get(USER_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        Ok(Self {
            current,
            subscribers: Vec::new(),
        })
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Attach a subscriber. It is invoked immediately with the current value,
    /// then again on every subsequent change.
    pub fn subscribe<F>(&mut self, mut subscriber: F)
    where
        F: FnMut(Option<&User>) + 'static,
    {
        subscriber(self.current.as_ref());
        self.subscribers.push(Box::new(subscriber));
    }

    /// Set the logged-in user and notify subscribers.
    pub fn set_current(&mut self, user: User) {
        self.current = Some(user);
        self.notify();
    }

    /// Clear the logged-in user and notify subscribers. Idempotent: clearing
    /// an already-empty session still emits, matching logout semantics.
    pub fn clear(&mut self) {
        self.current = None;
        self.notify();
    }

    fn notify(&mut self) {
        let current = self.current.clone();
        for subscriber in &mut self.subscribers {
            subscriber(current.as_ref());
        }
    }
}
