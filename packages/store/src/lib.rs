pub mod config;
pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{LoginConfig, StorageConfig, SubmitConfig};
pub use error::StoreError;
pub use models::{age_from_number, is_js_whitespace, js_trim, user_key, Credentials, UserRecord, UserTable};
pub use repo::{AuthOutcome, KeyValueStore, UserDirectory};
