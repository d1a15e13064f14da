//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the sign-in card persists accounts in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: a process-local [`store::MemoryStore`]

use std::rc::Rc;

use store::KeyValueStore;

/// Type-erased store shared by the controller and its directory.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Create the platform-appropriate store.
pub fn make_store() -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Rc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Rc::new(store::MemoryStore::new())
    }
}
