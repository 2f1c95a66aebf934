//! Storage abstraction for persistence.

mod bridge;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use bridge::{KEY_DRAWING, KEY_REDO_STACK, KEY_SETTINGS, KEY_UNDO_STACK, PersistenceBridge};
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Textual key-value store the session persists into.
///
/// Implementations can keep values in memory, in files, or in browser
/// localStorage. The interface is synchronous: every backend the
/// engine targets completes its operations inline, and session state
/// must be mirrored in event order.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Textual key-value store (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait KvStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
