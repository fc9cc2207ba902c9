//! Storefront - Dioxus Fullstack Web Application
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

use storefront::app::App;
use storefront::config::{self, StorefrontConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_client=debug")),
        )
        .init();

    let config = load_config()?;
    tracing::info!(api_url = %config.api_url, demo_auth = config.demo_auth, "Starting storefront");
    config::init(config);

    // In fullstack mode, this handles both server and client
    dioxus::launch(App);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<StorefrontConfig> {
    StorefrontConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<StorefrontConfig> {
    Ok(StorefrontConfig::default())
}
