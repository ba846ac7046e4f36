//! # Client configuration: `tutorhub.toml`
//!
//! The web build embeds a small TOML file that tells the client where the
//! lesson API lives and under which `localStorage` keys the session is kept.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # no trailing slash needed
//!
//! [session]
//! user_key = "user"        # JSON user record
//! role_key = "userType"    # "Tutor" or "Learner"
//! ```
//!
//! Every section and field has a default, so an empty file is equivalent to
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `tutorhub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the lesson API. Also the prefix of
    /// server-relative content URLs in upload results.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Keys of the persisted session record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_key")]
    pub user_key: String,
    #[serde(default = "default_role_key")]
    pub role_key: String,
}

fn default_user_key() -> String {
    "user".to_string()
}

fn default_role_key() -> String {
    "userType".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_key: default_user_key(),
            role_key: default_role_key(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tutorhub.toml"
    }

    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
