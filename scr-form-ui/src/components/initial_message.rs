use dioxus::prelude::*;

#[component]
pub fn InitialMessage() -> Element {
    rsx! {
        div {
            id: "initialMessage",
            class: "text-center text-muted py-5",
            p { "Select a soil type and submit to see recommended crops." }
        }
    }
}
