//! Shopping cart page

use dioxus::prelude::*;

use crate::components::{format_price, CartLine, LoadingSpinner};
use crate::routes::Route;
use crate::state::use_services;

#[component]
pub fn Cart() -> Element {
    let services = use_services();
    let mut busy = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let client = services.client.clone();
    let mut items = use_resource(move || {
        let client = client.clone();
        async move { client.list_cart().await }
    });

    let client = services.client.clone();
    let set_quantity = move |(item_id, product_id, quantity): (i64, i64, u32)| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match client.update_cart_item(item_id, product_id, quantity).await {
                Ok(_) => items.restart(),
                Err(e) => {
                    tracing::warn!(error = %e, item_id, "Updating cart line failed");
                    action_error.set(Some("Could not update the quantity".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let client = services.client.clone();
    let remove = move |item_id: i64| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match client.remove_cart_item(item_id).await {
                Ok(()) => items.restart(),
                Err(e) => {
                    tracing::warn!(error = %e, item_id, "Removing cart line failed");
                    action_error.set(Some("Could not remove the item".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let client = services.client.clone();
    let clear = move |_| {
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match client.clear_cart().await {
                Ok(()) => items.restart(),
                Err(e) => {
                    tracing::warn!(error = %e, "Clearing cart failed");
                    action_error.set(Some("Could not clear the cart".to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            h1 { "Your cart" }

            if let Some(err) = action_error() {
                div { class: "alert alert-error", "{err}" }
            }

            match &*items.read() {
                Some(Ok(lines)) if !lines.is_empty() => {
                    let total = format_price(lines.iter().map(|l| l.line_total()).sum());
                    rsx! {
                        for line in lines.iter() {
                            CartLine {
                                key: "{line.id}",
                                item: line.clone(),
                                busy: busy(),
                                on_quantity: {
                                    let (item_id, product_id) = (line.id, line.product_id);
                                    let set_quantity = set_quantity.clone();
                                    move |quantity| set_quantity((item_id, product_id, quantity))
                                },
                                on_remove: {
                                    let item_id = line.id;
                                    let remove = remove.clone();
                                    move |_| remove(item_id)
                                },
                            }
                        }
                        div {
                            class: "card cart-summary",
                            p { "Total: " strong { "{total}" } }
                            button {
                                class: "btn btn-secondary",
                                disabled: busy(),
                                onclick: clear,
                                "Clear cart"
                            }
                        }
                    }
                }
                Some(Ok(_)) => rsx! {
                    div {
                        class: "card",
                        p { class: "muted", "Your cart is empty." }
                        Link { to: Route::Wishlist {}, class: "btn btn-secondary", "Browse your wishlist" }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "alert alert-error", "Error loading cart: {e}" }
                },
                None => rsx! {
                    LoadingSpinner {}
                },
            }
        }
    }
}
