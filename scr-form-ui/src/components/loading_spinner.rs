//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while a recommendation request is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            id: "loadingSpinner",
            class: "text-center py-5",
            div {
                class: "spinner-border text-teal",
                role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
            p { class: "mt-2 text-muted", "Finding suitable crops..." }
        }
    }
}
