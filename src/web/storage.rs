use crate::error::BootstrapError;
use crate::session::SessionStore;

/// `window.localStorage`, resolved on every read.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage(key: &str) -> Result<web_sys::Storage, BootstrapError> {
    let w = web_sys::window().ok_or(BootstrapError::NoWindow)?;
    let storage = w
        .local_storage()
        .map_err(|_| BootstrapError::storage_access(key, "local_storage() threw"))?;
    storage.ok_or_else(|| BootstrapError::storage_access(key, "localStorage unavailable"))
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BootstrapError> {
        local_storage(key)?
            .get_item(key)
            .map_err(|_| BootstrapError::storage_access(key, "get_item() threw"))
    }
}
