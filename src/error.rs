use thiserror::Error;

/// Failures surfaced by the bootstrap path.
///
/// The dispatch itself only ever produces `StorageAccess`; the remaining
/// variants come from the browser glue that wires it up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("storage read of `{key}` failed: {reason}")]
    StorageAccess { key: String, reason: String },

    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("lifecycle hook failed: {0}")]
    Lifecycle(String),
}

impl BootstrapError {
    pub fn storage_access(key: &str, reason: impl Into<String>) -> Self {
        Self::StorageAccess {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl From<BootstrapError> for wasm_bindgen::JsValue {
    fn from(e: BootstrapError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_access_message_names_key_and_reason() {
        let e = BootstrapError::storage_access("JWT", "get_item() threw");
        assert_eq!(e.to_string(), "storage read of `JWT` failed: get_item() threw");
    }
}
