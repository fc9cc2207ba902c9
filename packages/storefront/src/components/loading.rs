//! Loading components

use dioxus::prelude::*;

/// Full-width loading spinner
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div {
                class: "loading-dots",
                div { class: "dot" }
                div { class: "dot", style: "animation-delay: 0.1s" }
                div { class: "dot", style: "animation-delay: 0.2s" }
            }
            p { class: "muted", "{label}" }
        }
    }
}
