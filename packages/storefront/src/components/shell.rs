use dioxus::prelude::*;

use super::Header;
use crate::routes::Route;

/// Page chrome shared by every route.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Header {}
        main {
            class: "container",
            Outlet::<Route> {}
        }
    }
}
