//! Authentication state derived from the persisted session.

use crate::error::StorageError;
use crate::models::{Role, Session, UserRecord};
use crate::session::{KeyValueStorage, SessionStore};

/// What the router is allowed to know about the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Anonymous,
    Authenticated(Role),
}

impl Access {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Access::Authenticated(_))
    }

    pub fn role(self) -> Option<Role> {
        match self {
            Access::Anonymous => None,
            Access::Authenticated(role) => Some(role),
        }
    }
}

/// Client-side login state. Trust is local only: nothing here is checked
/// against the server.
#[derive(Clone, Debug)]
pub struct AuthGate<S: KeyValueStorage> {
    store: SessionStore<S>,
    session: Option<Session>,
}

impl<S: KeyValueStorage> AuthGate<S> {
    /// Read the persisted session once.
    pub fn new(store: SessionStore<S>) -> Self {
        let session = store.load();
        Self { store, session }
    }

    pub fn access(&self) -> Access {
        match &self.session {
            Some(session) => Access::Authenticated(session.role),
            None => Access::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Id to upload lessons under: only a user whose record says `Tutor`.
    pub fn tutor_id(&self) -> Option<&str> {
        let user = self.user()?;
        if user.user_type == Role::Tutor.as_str() && !user.id.is_empty() {
            Some(&user.id)
        } else {
            None
        }
    }

    /// Log in and persist. The in-memory login holds even if persisting fails.
    pub fn login(&mut self, user: UserRecord, role: Role) -> Result<(), StorageError> {
        let result = self.store.save(&user, role);
        self.session = Some(Session { user, role });
        result
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.store.clear();
    }
}
