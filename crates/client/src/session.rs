use shared::model::User;
use tracing::{debug, warn};

use crate::storage::Storage;

pub const TOKEN_KEY: &str = "auth_token";
pub const LEGACY_TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user_data";
pub const LEGACY_USER_KEY: &str = "user";

const ALL_KEYS: [&str; 4] = [TOKEN_KEY, LEGACY_TOKEN_KEY, USER_KEY, LEGACY_USER_KEY];

/// How the session maps onto storage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyLayout {
    /// One key per value. Values only found under a legacy key are moved to the
    /// current key the first time they are read
    #[default]
    Migrate,
    /// Every write goes to both the current and the legacy key, for pages that
    /// still read the legacy keys directly
    Mirror,
}

/// Token and profile of the signed in user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Reads and writes the [Session] through a [Storage]
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    layout: KeyLayout,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S, layout: KeyLayout) -> Self {
        Self { storage, layout }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn layout(&self) -> KeyLayout {
        self.layout
    }

    pub fn load(&self) -> Session {
        Session {
            token: self.read_token(),
            user: self.read_user(),
        }
    }

    pub fn read_token(&self) -> Option<String> {
        self.read(TOKEN_KEY, LEGACY_TOKEN_KEY)
    }

    /// Missing, `null` and malformed records all read as no user
    pub fn read_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY, LEGACY_USER_KEY)?;
        match serde_json::from_str::<Option<User>>(&raw) {
            Ok(user) => user,
            Err(e) => {
                warn!("Ignoring malformed user record in storage: {e}");
                None
            }
        }
    }

    pub fn write_token(&self, token: &str) {
        self.write(TOKEN_KEY, LEGACY_TOKEN_KEY, token);
    }

    pub fn write_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(serialized) => self.write(USER_KEY, LEGACY_USER_KEY, &serialized),
            Err(e) => warn!("Failed to serialize user for storage: {e}"),
        }
    }

    /// Removes every session key, current and legacy, regardless of layout
    pub fn clear(&self) {
        for key in ALL_KEYS {
            self.storage.remove(key);
        }
    }

    fn read(&self, key: &str, legacy_key: &str) -> Option<String> {
        if let Some(value) = self.storage.get(key).filter(|v| !v.is_empty()) {
            return Some(value);
        }

        let value = self.storage.get(legacy_key).filter(|v| !v.is_empty())?;
        if self.layout == KeyLayout::Migrate {
            debug!("Migrating stored {legacy_key} to {key}");
            self.storage.set(key, &value);
            self.storage.remove(legacy_key);
        }
        Some(value)
    }

    fn write(&self, key: &str, legacy_key: &str, value: &str) {
        self.storage.set(key, value);
        match self.layout {
            KeyLayout::Migrate => self.storage.remove(legacy_key),
            KeyLayout::Mirror => self.storage.set(legacy_key, value),
        }
    }
}
