//! Orders page, the landing spot after a verified payment

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Orders() -> Element {
    rsx! {
        div {
            class: "card",
            h1 { "Your orders" }
            p {
                class: "muted",
                "Paid orders appear here once the store has processed them."
            }
            Link { to: Route::Home {}, class: "btn btn-secondary", "Continue shopping" }
        }
    }
}
