use dioxus::prelude::*;
use storefront_client::CartItem;

use super::format_price;

/// One cart row with quantity controls.
#[component]
pub fn CartLine(
    item: CartItem,
    busy: bool,
    on_quantity: EventHandler<u32>,
    on_remove: EventHandler<()>,
) -> Element {
    let title = item
        .product
        .as_ref()
        .map(|p| p.title.clone())
        .unwrap_or_else(|| format!("Product #{}", item.product_id));
    let unit_price = item.product.as_ref().map(|p| format_price(p.effective_price()));
    let line_total = format_price(item.line_total());
    let quantity = item.quantity;

    rsx! {
        div {
            class: "card cart-line",
            div {
                class: "cart-line-info",
                h3 { "{title}" }
                if let Some(price) = unit_price {
                    p { class: "muted", "{price} each" }
                }
            }
            div {
                class: "cart-line-controls",
                button {
                    class: "btn btn-secondary",
                    disabled: busy || quantity <= 1,
                    onclick: move |_| on_quantity.call(quantity - 1),
                    "-"
                }
                span { class: "quantity", "{quantity}" }
                button {
                    class: "btn btn-secondary",
                    disabled: busy,
                    onclick: move |_| on_quantity.call(quantity + 1),
                    "+"
                }
                span { class: "line-total", "{line_total}" }
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
