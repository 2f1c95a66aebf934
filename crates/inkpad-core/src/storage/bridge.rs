//! Best-effort mirroring of session state into a key-value store.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::KvStore;
use crate::board::Drawing;
use crate::history::History;
use crate::tools::ToolSettings;

/// Key holding the serialized drawing.
pub const KEY_DRAWING: &str = "inkpad.drawing";
/// Key holding the serialized undo stack.
pub const KEY_UNDO_STACK: &str = "inkpad.undo";
/// Key holding the serialized redo stack.
pub const KEY_REDO_STACK: &str = "inkpad.redo";
/// Key holding the serialized tool settings.
pub const KEY_SETTINGS: &str = "inkpad.settings";

/// Writes session state to the store after every change and restores
/// it at startup.
///
/// Persistence never gets in the session's way: a failed write is
/// logged and swallowed, and a missing or malformed value loads as the
/// default. The in-memory session stays authoritative throughout.
pub struct PersistenceBridge {
    store: Arc<dyn KvStore>,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn save_drawing(&self, drawing: &Drawing) {
        self.write(KEY_DRAWING, drawing);
    }

    /// Persist both history stacks under their own keys.
    pub fn save_history(&self, history: &History) {
        self.write(KEY_UNDO_STACK, history.undo_stack());
        self.write(KEY_REDO_STACK, history.redo_stack());
    }

    pub fn save_settings(&self, settings: &ToolSettings) {
        self.write(KEY_SETTINGS, settings);
    }

    pub fn load_drawing(&self) -> Drawing {
        self.read(KEY_DRAWING)
    }

    pub fn load_history(&self) -> History {
        History::from_stacks(self.read(KEY_UNDO_STACK), self.read(KEY_REDO_STACK))
    }

    pub fn load_settings(&self) -> ToolSettings {
        self.read(KEY_SETTINGS)
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &json) {
            log::warn!("failed to persist {key}: {e}");
        }
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("discarding malformed {key}: {e}");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("failed to load {key}: {e}");
                T::default()
            }
        }
    }
}
