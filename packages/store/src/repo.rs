//! # Directory — demo accounts on an abstract key-value store
//!
//! [`UserDirectory`] is the storage layer of the sign-in demo. It keeps every
//! account in one JSON-encoded [`UserTable`] stored under a single key. All reads
//! and writes go through the [`KeyValueStore`] trait, so the same logic runs
//! against browser `localStorage` ([`crate::LocalStorage`]) or an in-memory map
//! ([`crate::MemoryStore`]).
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous, string-keyed interface with `get`/`set`/`remove`, mirroring the
//! browser's Web Storage API.
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`try_load`](UserDirectory::try_load) | Reads and decodes the table. A missing key is an empty table; malformed JSON is [`StoreError::Corrupt`]. |
//! | [`load`](UserDirectory::load) | Like `try_load`, but any failure is logged and recovered as an empty table. |
//! | [`find`](UserDirectory::find) | Looks up a single record by display name (case- and whitespace-insensitive). |
//!
//! ## Write path
//!
//! The table is always rewritten wholesale: read the whole map, mutate it, write
//! the whole map back. There are no partial updates and the last write wins.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`save`](UserDirectory::save) | Serializes and writes the full table. |
//! | [`authenticate`](UserDirectory::authenticate) | Signs in an existing account, or registers a new one when the key is free. |
//! | [`clear_current_user`](UserDirectory::clear_current_user) | Removes the current-user marker. |

use std::rc::Rc;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::models::{user_key, Credentials, UserRecord, UserTable};

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Result of checking a validated submission against the directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The key exists and the password matched.
    SignedIn(UserRecord),
    /// The key was free; a new record was stored.
    Registered(UserRecord),
    /// The key exists but the password differs. Nothing was written.
    WrongPassword,
}

/// Demo account table persisted in a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct UserDirectory<S> {
    store: S,
    keys: StorageConfig,
}

impl<S: KeyValueStore> UserDirectory<S> {
    /// Create a directory using the default storage keys.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageConfig::default())
    }

    pub fn with_keys(store: S, keys: StorageConfig) -> Self {
        Self { store, keys }
    }

    /// Read and decode the whole table.
    pub fn try_load(&self) -> Result<UserTable, StoreError> {
        match self.store.get(&self.keys.users_key)? {
            Some(json) => serde_json::from_str(&json).map_err(StoreError::Corrupt),
            None => Ok(UserTable::new()),
        }
    }

    /// Read the whole table, treating unreadable or corrupt data as empty.
    pub fn load(&self) -> UserTable {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!("Discarding stored accounts under {:?}: {}", self.keys.users_key, e);
            UserTable::new()
        })
    }

    /// Serialize and write the whole table.
    pub fn save(&self, users: &UserTable) -> Result<(), StoreError> {
        let json = serde_json::to_string(users).map_err(StoreError::Encode)?;
        self.store.set(&self.keys.users_key, &json)
    }

    pub fn find(&self, display_name: &str) -> Option<UserRecord> {
        self.load().remove(&user_key(display_name))
    }

    /// Sign in or register.
    ///
    /// Registration persists the full table before returning. A storage error
    /// during that write is returned as-is and nothing is considered registered.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<AuthOutcome, StoreError> {
        let mut users = self.load();
        let key = credentials.key();

        if let Some(existing) = users.get(&key) {
            if existing.password == credentials.password {
                tracing::info!("Signed in {:?}", existing.display_name);
                return Ok(AuthOutcome::SignedIn(existing.clone()));
            }
            tracing::debug!("Password mismatch for {:?}", key);
            return Ok(AuthOutcome::WrongPassword);
        }

        let record = credentials.to_record();
        users.insert(key, record.clone());
        self.save(&users)?;
        tracing::info!("Registered {:?}", record.display_name);
        Ok(AuthOutcome::Registered(record))
    }

    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        self.store.remove(&self.keys.current_user_key)
    }
}
