use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::BaseTimer;

/// `tokio::time::sleep`, for SSR and native tests.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl BaseTimer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// `setTimeout` via gloo.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl BaseTimer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_timer() -> Arc<dyn BaseTimer> {
    Arc::new(BrowserTimer)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_timer() -> Arc<dyn BaseTimer> {
    Arc::new(TokioTimer)
}
