use std::collections::HashMap;
use std::sync::Mutex;

use super::{BaseStorage, StorageError};

/// Process-local storage. Used for SSR, tests, and as the browser fallback
/// when `localStorage` is blocked.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BaseStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// `None` when there is no window or the browser refuses storage access.
    pub fn open() -> Option<Self> {
        let inner = web_sys::window()?.local_storage().ok()??;
        Some(Self { inner })
    }
}

#[cfg(target_arch = "wasm32")]
impl BaseStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// The durable storage for this platform.
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> std::sync::Arc<dyn BaseStorage> {
    match BrowserStorage::open() {
        Some(storage) => std::sync::Arc::new(storage),
        None => {
            tracing::warn!("localStorage unavailable, falling back to memory");
            std::sync::Arc::new(MemoryStorage::new())
        }
    }
}

/// The durable storage for this platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> std::sync::Arc<dyn BaseStorage> {
    std::sync::Arc::new(MemoryStorage::new())
}
