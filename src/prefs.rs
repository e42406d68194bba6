use tokeidai_core::{load_muted, save_muted, PreferenceStore, StoreError};
use web_sys::Storage;

/// `window.localStorage`, when the browser grants it.
pub(crate) struct LocalStore;

impl LocalStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteRejected {
                key: key.to_string(),
            })
    }
}

pub(crate) fn load_muted_preference() -> bool {
    load_muted(&LocalStore)
}

pub(crate) fn save_muted_preference(muted: bool) {
    if let Err(err) = save_muted(&LocalStore, muted) {
        gloo::console::warn!("mute preference not saved", err.to_string());
    }
}
