use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`] or while decoding its contents.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode data: {0}")]
    Encode(#[source] serde_json::Error),
}
