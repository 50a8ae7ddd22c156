//! Description of the currently selected soil.

use crate::state::AppState;
use dioxus::prelude::*;

/// Hidden unless the selected soil has a description.
#[component]
pub fn SoilDescriptionPanel() -> Element {
    let state = use_context::<AppState>();
    let description = (state.description)();

    rsx! {
        if let Some(text) = description {
            div {
                id: "soilDescription",
                class: "alert alert-secondary mt-3",
                p { id: "soilDescriptionText", class: "mb-0", "{text}" }
            }
        }
    }
}
