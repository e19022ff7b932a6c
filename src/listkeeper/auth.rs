use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{ListKeeperError, Result};
use crate::model::User;

/// The interface the core requires from the authentication service.
///
/// The real deployment would put an HTTP client behind this trait; the
/// shipped [`DirectoryAuthenticator`] keeps the user directory locally so the
/// CLI works without a server. Either way the contract is the same: bad
/// credentials surface as `Authentication` and leave no state behind.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<User>;
    fn register(&mut self, registration: Registration) -> Result<User>;
    fn users(&self) -> Result<Vec<User>>;
    fn user_by_id(&self, id: i64) -> Result<User>;
    fn user_by_username(&self, username: &str) -> Result<User>;
    fn update_user(&mut self, user: User) -> Result<User>;
    fn delete_user(&mut self, id: i64) -> Result<bool>;
}

/// Input to [`Authenticator::register`].
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub phone: Option<String>,
    pub password: String,
}

/// One entry in the user directory: the public account record plus the
/// password digest, which never leaves this module.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    user: User,
    password_digest: String,
}

/// A self-contained user directory with SHA-256 password digests.
///
/// With a path, the directory persists itself as `users.json` after every
/// mutation; the client's key-value store only ever holds the logged-in
/// user. Without a path it is purely in-memory, which is what tests use.
#[derive(Debug, Default)]
pub struct DirectoryAuthenticator {
    records: Vec<UserRecord>,
    path: Option<PathBuf>,
}

impl DirectoryAuthenticator {
    /// An empty, non-persistent directory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the directory from `path`, or start empty if the file does not
    /// exist yet. Mutations are written back to the same file.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let content = fs::read_to_string(&path).map_err(ListKeeperError::Io)?;
            serde_json::from_str(&content).map_err(ListKeeperError::Serialization)?
        } else {
            Vec::new()
        };
        Ok(Self {
            records,
            path: Some(path),
        })
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(ListKeeperError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&self.records).map_err(ListKeeperError::Serialization)?;
        fs::write(path, content).map_err(ListKeeperError::Io)?;
        Ok(())
    }

    fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.records
            .iter()
            .filter(|r| r.user.deleted_at.is_none())
            .find(|r| r.user.username.as_deref() == Some(username))
    }

    fn digest(password: &str) -> String {
        format!("{:x}", Sha256::digest(password.as_bytes()))
    }
}

impl Authenticator for DirectoryAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let record = self.find_by_username(username).ok_or_else(|| {
            ListKeeperError::Authentication("Invalid username or password".to_string())
        })?;

        if record.password_digest != Self::digest(password) {
            return Err(ListKeeperError::Authentication(
                "Invalid username or password".to_string(),
            ));
        }

        // The token is session-scoped: issued on every successful
        // authentication, never stored in the directory.
        let mut user = record.user.clone();
        user.token = Some(Uuid::new_v4().to_string());
        Ok(user)
    }

    fn register(&mut self, registration: Registration) -> Result<User> {
        if self.find_by_username(&registration.username).is_some() {
            return Err(ListKeeperError::Validation(format!(
                "Username '{}' is already taken",
                registration.username
            )));
        }

        let id = self
            .records
            .iter()
            .map(|r| r.user.id)
            .max()
            .unwrap_or(0)
            + 1;
        let user = User {
            id,
            email: registration.email,
            role: Some("user".to_string()),
            username: Some(registration.username.clone()),
            firstname: Some(registration.firstname),
            lastname: Some(registration.lastname),
            phone: registration.phone,
            created_at: Some(Utc::now()),
            created_by: Some(registration.username),
            updated_at: None,
            updated_by: None,
            deleted_at: None,
            deleted_by: None,
            token: None,
        };

        self.records.push(UserRecord {
            user: user.clone(),
            password_digest: Self::digest(&registration.password),
        });
        self.persist()?;
        Ok(user)
    }

    fn users(&self) -> Result<Vec<User>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user.deleted_at.is_none())
            .map(|r| r.user.clone())
            .collect())
    }

    fn user_by_id(&self, id: i64) -> Result<User> {
        self.records
            .iter()
            .filter(|r| r.user.deleted_at.is_none())
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone())
            .ok_or_else(|| ListKeeperError::UserNotFound(id.to_string()))
    }

    fn user_by_username(&self, username: &str) -> Result<User> {
        self.find_by_username(username)
            .map(|r| r.user.clone())
            .ok_or_else(|| ListKeeperError::UserNotFound(username.to_string()))
    }

    fn update_user(&mut self, user: User) -> Result<User> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| ListKeeperError::UserNotFound(user.id.to_string()))?;

        let mut updated = user;
        updated.updated_at = Some(Utc::now());
        updated.updated_by = updated.username.clone();
        record.user = updated.clone();
        self.persist()?;
        Ok(updated)
    }

    fn delete_user(&mut self, id: i64) -> Result<bool> {
        let Some(record) = self.records.iter_mut().find(|r| r.user.id == id) else {
            return Ok(false);
        };
        if record.user.deleted_at.is_some() {
            return Ok(false);
        }
        record.user.deleted_at = Some(Utc::now());
        record.user.deleted_by = record.user.username.clone();
        self.persist()?;
        Ok(true)
    }
}
