pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ApiConfig, ClientConfig, SessionConfig};
pub use error::StorageError;
pub use gate::{Access, AuthGate};
pub use models::{Role, Session, UserRecord};
pub use session::{KeyValueStorage, SessionStore};

/// Storage backend used by the running client.
///
/// Browser `localStorage` on the web build, an in-memory map everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = MemoryStorage;
