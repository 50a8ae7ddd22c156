//! Reusable Dioxus RSX components for the soil form.

mod crop_results;
mod error_display;
mod initial_message;
mod loading_spinner;
mod soil_description;
mod soil_form;
mod soil_selector;

pub use crop_results::{CropCardView, CropResults, SoilFertilizerBlock};
pub use error_display::ErrorDisplay;
pub use initial_message::InitialMessage;
pub use loading_spinner::LoadingSpinner;
pub use soil_description::SoilDescriptionPanel;
pub use soil_form::SoilForm;
pub use soil_selector::SoilSelector;
