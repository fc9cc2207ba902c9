//! Global state management

use dioxus::prelude::*;
use std::sync::Arc;
use storefront_client::StorefrontClient;

use crate::config::StorefrontConfig;
use crate::flows::auth::{
    BaseAccountDirectory, BaseCodeIssuer, LocalCodeIssuer, SeededAccountDirectory,
};
use crate::platform::{default_storage, default_timer, BaseClock, BaseStorage, BaseTimer, SystemClock};

/// Capabilities shared by every page, provided once by `App`.
#[derive(Clone)]
pub struct Services {
    pub client: Arc<StorefrontClient>,
    pub clock: Arc<dyn BaseClock>,
    pub storage: Arc<dyn BaseStorage>,
    pub timer: Arc<dyn BaseTimer>,
    pub codes: Arc<dyn BaseCodeIssuer>,
    pub accounts: Arc<dyn BaseAccountDirectory>,
    pub config: StorefrontConfig,
}

impl Services {
    pub fn from_config(config: StorefrontConfig) -> Self {
        let client = Arc::new(
            StorefrontClient::new(config.api_url.clone())
                .with_retries(config.payment_verify_retries),
        );
        let clock: Arc<dyn BaseClock> = Arc::new(SystemClock);

        let accounts: Arc<dyn BaseAccountDirectory> = if config.demo_auth {
            tracing::info!("Using the seeded demo account directory");
            Arc::new(SeededAccountDirectory::new())
        } else {
            client.clone()
        };

        Self {
            codes: Arc::new(LocalCodeIssuer::new(clock.clone(), config.otp_ttl)),
            accounts,
            storage: default_storage(),
            timer: default_timer(),
            clock,
            client,
            config,
        }
    }
}

/// Hook to access the shared services
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Bumped whenever the wishlist changes so the header count refetches.
#[derive(Clone, Copy)]
pub struct WishlistRevision {
    pub revision: Signal<u32>,
}

impl WishlistRevision {
    pub fn new() -> Self {
        Self {
            revision: Signal::new(0),
        }
    }

    pub fn bump(&mut self) {
        let next = *self.revision.peek() + 1;
        self.revision.set(next);
    }
}

pub fn use_wishlist_revision() -> WishlistRevision {
    use_context::<WishlistRevision>()
}
