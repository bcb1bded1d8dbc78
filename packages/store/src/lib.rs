pub mod error;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use error::{SessionError, StorageError};
pub use models::{Session, User};
pub use session::{KeyValueStore, SessionStore};
