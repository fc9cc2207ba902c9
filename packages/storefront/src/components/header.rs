//! Site header with navigation and the wishlist badge

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_services, use_wishlist_revision};

#[component]
pub fn Header() -> Element {
    let services = use_services();
    let wishlist = use_wishlist_revision();

    // Refetches whenever the wishlist revision moves.
    let count = use_resource(move || {
        let client = services.client.clone();
        let _revision = (wishlist.revision)();
        async move {
            match client.wishlist_count().await {
                Ok(count) => Some(count),
                Err(e) => {
                    tracing::debug!(error = %e, "Wishlist count unavailable");
                    None
                }
            }
        }
    });

    let badge = (*count.read()).flatten().filter(|n| *n > 0);

    rsx! {
        header {
            class: "site-header",
            nav {
                class: "container nav",
                Link { to: Route::Home {}, class: "brand", "Storefront" }
                div {
                    class: "nav-links",
                    Link {
                        to: Route::Wishlist {},
                        "Wishlist"
                        if let Some(n) = badge {
                            span { class: "badge", "{n}" }
                        }
                    }
                    Link { to: Route::Cart {}, "Cart" }
                    Link { to: Route::Orders {}, "Orders" }
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
