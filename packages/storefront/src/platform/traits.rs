// Capability traits for dependency injection
//
// Naming convention: Base* for trait names (e.g., BaseClock, BaseStorage)
//
// Futures are not `Send`: in the browser everything runs on one thread and
// the gloo/web-sys handles are `!Send`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::routes::Destination;

// =============================================================================
// Clock
// =============================================================================

pub trait BaseClock {
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// Key-value storage (localStorage in the browser)
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage write failed: {0}")]
    Write(String),
}

pub trait BaseStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Timer
// =============================================================================

#[async_trait(?Send)]
pub trait BaseTimer {
    async fn sleep(&self, duration: Duration);
}

// =============================================================================
// Navigation
// =============================================================================

pub trait BaseNavigator {
    fn navigate(&self, to: Destination);
}
