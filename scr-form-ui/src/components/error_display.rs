//! Error panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays the message as-is; callers add any "Error: " prefix.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "errorMessage",
            class: "alert alert-danger",
            role: "alert",
            "{props.message}"
        }
    }
}
