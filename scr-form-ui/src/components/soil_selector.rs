//! Dropdown selector for choosing a soil type.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SoilSelectorProps {
    /// Soil names in page order
    pub soils: Vec<String>,
    /// Called with the new value, "" for the placeholder
    pub on_select: EventHandler<String>,
}

/// Soil dropdown with an empty placeholder option first.
#[component]
pub fn SoilSelector(props: SoilSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let selected = (state.selected_soil)();

    let on_select = props.on_select;
    let on_change = move |evt: Event<FormData>| {
        on_select.call(evt.value());
    };

    rsx! {
        div {
            class: "mb-3",
            label {
                r#for: "soilSelect",
                class: "form-label fw-bold",
                "Soil Type"
            }
            select {
                id: "soilSelect",
                class: "form-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "-- Select a soil type --"
                }
                for soil in props.soils.iter() {
                    option {
                        value: "{soil}",
                        selected: *soil == selected,
                        "{soil}"
                    }
                }
            }
        }
    }
}
