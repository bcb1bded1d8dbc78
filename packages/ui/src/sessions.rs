//! Shared session store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native** (tests, `dx serve` without `web`): [`store::MemoryStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStore;

pub type PlatformSessionStore = store::SessionStore<PlatformStorage>;

/// Create a platform-appropriate session store.
pub fn make_session_store() -> PlatformSessionStore {
    store::SessionStore::new(PlatformStorage::new())
}
