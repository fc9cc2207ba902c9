//! Root application component

use dioxus::prelude::*;

use crate::analytics::{ping_if_due, PingGate};
use crate::config;
use crate::routes::Route;
use crate::state::{Services, WishlistRevision};

/// Root application component
#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| Services::from_config(config::get().clone()));
    use_context_provider(WishlistRevision::new);

    // One ping attempt per mount; the gate enforces the cooldown across reloads.
    use_hook(move || {
        spawn(async move {
            let gate = PingGate::new(
                services.storage.clone(),
                services.clock.clone(),
                services.config.ping_cooldown,
            );
            ping_if_due(&gate, &*services.client).await;
        });
    });

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
