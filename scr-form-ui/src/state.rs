//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals behind the form. It is also the
//! controller's [`FormView`]: every state change the controller makes lands
//! in a signal and re-renders the panels that read it.

use dioxus::prelude::*;
use scr_form::{FormView, UiState};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Which panel is visible
    pub ui: Signal<UiState>,
    /// Description of the selected soil, hidden when None
    pub description: Signal<Option<String>>,
    /// Current dropdown value ("" for the placeholder)
    pub selected_soil: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ui: Signal::new(UiState::Initial),
            description: Signal::new(None),
            selected_soil: Signal::new(String::new()),
        }
    }
}

impl FormView for AppState {
    fn set_description(&self, text: Option<String>) {
        let mut description = self.description;
        description.set(text);
    }

    fn set_state(&self, state: UiState) {
        let mut ui = self.ui;
        ui.set(state);
    }
}
