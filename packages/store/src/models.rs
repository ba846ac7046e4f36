//! # Session models
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The two account kinds. Stored as the literal strings `"Tutor"` / `"Learner"`. |
//! | [`UserRecord`] | The user object returned by the auth API. Only `id` and `user_type` are interpreted; every other field is carried along untouched. |
//! | [`Session`] | A user plus the role it was logged in with. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tutor,
    Learner,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Tutor, Role::Learner];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tutor => "Tutor",
            Role::Learner => "Learner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown role {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tutor" => Ok(Role::Tutor),
            "Learner" => Ok(Role::Learner),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// User object as handed out by the auth API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric ids are normalised to their decimal string.
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub user_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "user id must be a string or number, got {other}"
        ))),
    }
}

impl UserRecord {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            user_type: role.as_str().to_string(),
            extra: Map::new(),
        }
    }

    /// Builder method to attach an extra field.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Role named by `user_type`, if it is one of the known values.
    pub fn role(&self) -> Result<Role, UnknownRole> {
        self.user_type.parse()
    }

    /// Name to greet the user with: `name`, then `email`, then the id.
    pub fn display_name(&self) -> &str {
        ["name", "username", "email"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }
}

/// An authenticated user and the role the client routes on.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserRecord,
    pub role: Role,
}
