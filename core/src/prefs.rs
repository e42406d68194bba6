use std::cell::RefCell;
use std::collections::HashMap;

pub const MUTED_KEY: &str = "muted";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference write rejected for key '{key}'")]
    WriteRejected { key: String },
}

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Only the exact string `"true"` counts as muted.
pub fn load_muted(store: &dyn PreferenceStore) -> bool {
    store.get(MUTED_KEY).as_deref() == Some("true")
}

pub fn save_muted(store: &dyn PreferenceStore, muted: bool) -> Result<(), StoreError> {
    store.set(MUTED_KEY, if muted { "true" } else { "false" })
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
