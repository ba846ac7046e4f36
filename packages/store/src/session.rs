//! # Session persistence over a key-value backend
//!
//! [`SessionStore`] keeps the logged-in user between page loads. It writes
//! two string entries through the [`KeyValueStorage`] trait:
//!
//! | Key (default) | Value |
//! |---------------|-------|
//! | `user` | the [`UserRecord`] as JSON |
//! | `userType` | `"Tutor"` or `"Learner"` |
//!
//! A record is only trusted when both entries are present and parse. Anything
//! else (one key missing, broken JSON, an unknown role string) is purged on
//! [`load`](SessionStore::load) and reported as "no session".
//!
//! Backends live in sibling modules ([`crate::memory`], `crate::local`).

use crate::config::SessionConfig;
use crate::error::StorageError;
use crate::models::{Role, Session, UserRecord};

/// Synchronous string key-value storage, shaped after `window.localStorage`.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Reads and writes the persisted session record.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    keys: SessionConfig,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Store using the default `user` / `userType` keys.
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, SessionConfig::default())
    }

    pub fn with_keys(storage: S, keys: SessionConfig) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the persisted session, purging it if it is partial or corrupt.
    pub fn load(&self) -> Option<Session> {
        let user = self.storage.get(&self.keys.user_key);
        let role = self.storage.get(&self.keys.role_key);

        let (user, role) = match (user, role) {
            (None, None) => return None,
            (Some(user), Some(role)) => (user, role),
            _ => {
                tracing::warn!("Discarding partial session record");
                self.clear();
                return None;
            }
        };

        let parsed = serde_json::from_str::<UserRecord>(&user)
            .ok()
            .zip(role.parse::<Role>().ok());

        match parsed {
            Some((user, role)) => Some(Session { user, role }),
            None => {
                tracing::warn!("Discarding unreadable session record");
                self.clear();
                None
            }
        }
    }

    /// Persist both entries. If the role cannot be written both entries are
    /// removed, so a reader never observes half a record.
    pub fn save(&self, user: &UserRecord, role: Role) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;

        self.storage.set(&self.keys.user_key, &json)?;
        if let Err(e) = self.storage.set(&self.keys.role_key, role.as_str()) {
            self.clear();
            return Err(e);
        }
        Ok(())
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(&self.keys.user_key);
        self.storage.remove(&self.keys.role_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn tutor() -> UserRecord {
        UserRecord::new("7", Role::Tutor).with_field("email", "t@example.org")
    }

    #[test]
    fn test_empty_storage_has_no_session() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.load().is_none());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&tutor(), Role::Tutor).unwrap();

        assert_eq!(store.storage().get("userType").as_deref(), Some("Tutor"));
        let session = store.load().unwrap();
        assert_eq!(session.role, Role::Tutor);
        assert_eq!(session.user, tutor());
    }

    #[test]
    fn test_malformed_records_are_purged() {
        let cases: &[(Option<&str>, Option<&str>)] = &[
            (Some(r#"{"id":"1","user_type":"Tutor"}"#), None),
            (None, Some("Tutor")),
            (Some("not json"), Some("Tutor")),
            (Some("{\"id\":"), Some("Learner")),
            (Some(r#"{"user_type":"Tutor"}"#), Some("Tutor")),
            (Some(r#"{"id":"1"}"#), Some("Learner")),
            (Some("[]"), Some("Tutor")),
            (Some(r#"{"id":"1","user_type":"Tutor"}"#), Some("Admin")),
            (Some(r#"{"id":"1","user_type":"Tutor"}"#), Some("tutor")),
            (Some(r#"{"id":"1","user_type":"Tutor"}"#), Some("")),
        ];

        for (user, role) in cases {
            let storage = MemoryStorage::new();
            if let Some(user) = user {
                storage.set("user", user).unwrap();
            }
            if let Some(role) = role {
                storage.set("userType", role).unwrap();
            }
            // unrelated keys survive the purge
            storage.set("theme", "dark").unwrap();

            let store = SessionStore::new(storage);
            assert!(store.load().is_none(), "accepted {user:?} / {role:?}");
            assert!(store.storage().get("user").is_none());
            assert!(store.storage().get("userType").is_none());
            assert_eq!(store.storage().get("theme").as_deref(), Some("dark"));
        }
    }

    #[test]
    fn test_failed_role_write_rolls_back_user() {
        let storage = MemoryStorage::new().failing_writes_to("userType");
        let store = SessionStore::new(storage);

        let err = store.save(&tutor(), Role::Tutor).unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == "userType"));
        assert!(store.storage().is_empty());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_failed_overwrite_drops_previous_role() {
        let storage = MemoryStorage::new();
        storage.set("userType", "Learner").unwrap();
        let store = SessionStore::new(storage.failing_writes_to("userType"));

        assert!(store.save(&tutor(), Role::Tutor).is_err());
        assert!(store.storage().get("userType").is_none());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_custom_keys() {
        let keys = SessionConfig {
            user_key: "th.user".to_string(),
            role_key: "th.role".to_string(),
        };
        let store = SessionStore::with_keys(MemoryStorage::new(), keys);
        store.save(&tutor(), Role::Learner).unwrap();
        assert!(store.storage().get("user").is_none());
        assert_eq!(store.storage().get("th.role").as_deref(), Some("Learner"));
        assert_eq!(store.load().unwrap().role, Role::Learner);

        store.clear();
        assert!(store.storage().is_empty());
    }
}
