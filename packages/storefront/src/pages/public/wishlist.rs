//! Wishlist page

use dioxus::prelude::*;

use crate::components::{LoadingSpinner, WishlistCard};
use crate::state::{use_services, use_wishlist_revision};

#[component]
pub fn Wishlist() -> Element {
    let services = use_services();
    let mut revision = use_wishlist_revision();
    let mut busy = use_signal(|| false);
    let mut notice = use_signal(|| None::<Result<String, String>>);

    let client = services.client.clone();
    let mut items = use_resource(move || {
        let client = client.clone();
        async move { client.list_wishlist().await }
    });

    let client = services.client.clone();
    let remove = move |product_id: i64| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.remove_from_wishlist(product_id).await {
                Ok(()) => {
                    items.restart();
                    revision.bump();
                }
                Err(e) => {
                    tracing::warn!(error = %e, product_id, "Removing wishlist item failed");
                    notice.set(Some(Err("Could not remove the item".to_string())));
                }
            }
            busy.set(false);
        });
    };

    let client = services.client.clone();
    let add_to_cart = move |product_id: i64| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            notice.set(match client.add_to_cart(product_id, 1).await {
                Ok(_) => Some(Ok("Added to your cart".to_string())),
                Err(e) => {
                    tracing::warn!(error = %e, product_id, "Adding to cart failed");
                    Some(Err("Could not add the item to your cart".to_string()))
                }
            });
            busy.set(false);
        });
    };

    rsx! {
        div {
            h1 { "Your wishlist" }

            match notice() {
                Some(Ok(msg)) => rsx! { div { class: "alert alert-success", "{msg}" } },
                Some(Err(msg)) => rsx! { div { class: "alert alert-error", "{msg}" } },
                None => rsx! {},
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
                                on_remove: {
                                    let product_id = item.product_id;
                                    let remove = remove.clone();
                                    move |_| remove(product_id)
                                },
                                on_add_to_cart: {
                                    let product_id = item.product_id;
                                    let add_to_cart = add_to_cart.clone();
                                    move |_| add_to_cart(product_id)
                                },
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div { class: "card muted", "Nothing saved yet." }
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
