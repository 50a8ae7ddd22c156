use crate::state::UiState;

/// Where the controller sends visible changes.
///
/// Implementations take `&self`: DOM handles and reactive signals are both
/// shared handles with interior mutability.
pub trait FormView {
    /// Show the description panel with `text`, or hide it on `None`.
    fn set_description(&self, text: Option<String>);

    /// Switch the visible panel. Leaving [`UiState::Loading`] hides the spinner.
    fn set_state(&self, state: UiState);
}
