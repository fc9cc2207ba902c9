use dioxus::prelude::*;
use storefront_client::WishlistItem;

use super::format_price;

/// Saved product. Actions render only when a handler is given.
#[component]
pub fn WishlistCard(
    item: WishlistItem,
    busy: bool,
    on_remove: Option<EventHandler<()>>,
    on_add_to_cart: Option<EventHandler<()>>,
) -> Element {
    let product = item.product.clone();
    let title = product
        .as_ref()
        .map(|p| p.title.clone())
        .unwrap_or_else(|| format!("Product #{}", item.product_id));
    let price = product.as_ref().map(|p| format_price(p.effective_price()));
    let was = product
        .as_ref()
        .filter(|p| p.discount_price.is_some())
        .map(|p| format_price(p.price));
    let image = product.and_then(|p| p.image);
    let added = item.created_at.map(|at| at.format("%Y-%m-%d").to_string());

    rsx! {
        div {
            class: "card wishlist-card",
            if let Some(src) = image {
                img { class: "wishlist-image", src: "{src}", alt: "{title}" }
            }
            h3 { "{title}" }
            if let Some(price) = price {
                p {
                    class: "price",
                    if let Some(was) = was {
                        s { class: "muted", "{was}" }
                        " "
                    }
                    "{price}"
                }
            }
            if let Some(added) = added {
                p { class: "muted", "Added {added}" }
            }
            div {
                class: "actions",
                if let Some(on_add) = on_add_to_cart {
                    button {
                        class: "btn",
                        disabled: busy,
                        onclick: move |_| on_add.call(()),
                        "Add to cart"
                    }
                }
                if let Some(on_remove) = on_remove {
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_remove.call(()),
                        "Remove"
                    }
                }
            }
        }
    }
}
