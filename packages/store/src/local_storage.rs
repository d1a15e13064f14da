//! # Web Storage backend — browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It forwards to `window.localStorage` through [`web_sys::Storage`],
//! so the demo accounts survive page reloads within one browser profile.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up the `Storage` object on
//! every call. `web_sys::Storage` is not `Send`, and the lookup is a cheap
//! property read on `window`.
//!
//! ## Error handling
//!
//! A missing `window` or a disabled storage area (private browsing, sandboxed
//! iframes) is [`StoreError::Unavailable`]. Exceptions thrown by the browser,
//! such as `QuotaExceededError` on `setItem`, become [`StoreError::Backend`].

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StoreError;
use crate::repo::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Backend(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
