//! Browser localStorage implementation for WebAssembly.

use super::{KvStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Store backed by the browser's `window.localStorage`.
///
/// Note: This is intentionally not Send/Sync since WASM is single-threaded
/// and DOM handles are not thread-safe.
pub struct LocalStorageStore;

impl LocalStorageStore {
    /// Create a new localStorage-backed store.
    ///
    /// Note: The storage area itself is resolved on each access, so this
    /// never fails even when the page runs without a window.
    pub fn new() -> Self {
        Self
    }

    /// Resolve the backing storage area.
    fn backing() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Backend("No window object".to_string()))?;

        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| StorageError::Backend("localStorage not available".to_string()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for LocalStorageStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::backing()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Fails when the quota is exhausted or storage is disabled.
        Self::backing()?.set_item(key, value).map_err(js_err)
    }
}

fn js_err(e: JsValue) -> StorageError {
    StorageError::Backend(format!("localStorage error: {:?}", e))
}
