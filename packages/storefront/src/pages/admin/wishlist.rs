//! Admin view of a single user's wishlist

use dioxus::prelude::*;

use crate::components::{LoadingSpinner, WishlistCard};
use crate::state::use_services;

#[component]
pub fn AdminWishlist(user_id: i64) -> Element {
    let services = use_services();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let client = services.client.clone();
    let mut items = use_resource(use_reactive!(|user_id| {
        let client = client.clone();
        async move { client.list_wishlist_for_user(user_id).await }
    }));

    let client = services.client.clone();
    let clear_all = move |_| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match client.delete_wishlist_for_user(user_id).await {
                Ok(()) => {
                    tracing::info!(user_id, "Cleared user wishlist");
                    items.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, user_id, "Clearing user wishlist failed");
                    error.set(Some(format!("Could not clear the wishlist: {}", e)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            div {
                class: "page-header",
                h1 { "Wishlist for user #{user_id}" }
                button {
                    class: "btn btn-secondary",
                    disabled: busy(),
                    onclick: clear_all,
                    "Delete all"
                }
            }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            match &*items.read() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div {
                        class: "grid",
                        for item in list.iter() {
                            WishlistCard {
                                key: "{item.id}",
                                item: item.clone(),
                                busy: busy(),
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div { class: "card muted", "This user has no saved items." }
                },
                Some(Err(e)) => rsx! {
                    div { class: "alert alert-error", "Error loading wishlist: {e}" }
                },
                None => rsx! {
                    LoadingSpinner {}
                },
            }
        }
    }
}
