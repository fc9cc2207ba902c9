//! Home page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "card hero",
            h1 { "Welcome" }
            p { class: "muted", "Browse your saved items, review your cart, or sign in with your phone number." }
            div {
                class: "actions",
                Link { to: Route::Cart {}, class: "btn", "View cart" }
                Link { to: Route::Wishlist {}, class: "btn btn-secondary", "Wishlist" }
                Link { to: Route::Login {}, class: "btn btn-secondary", "Sign in" }
            }
        }
    }
}
