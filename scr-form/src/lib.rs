//! Controller for the soil selection form.
//!
//! The controller owns the soil descriptions scanned from the page, talks to
//! the recommendation endpoint through [`CropApi`] and pushes every visible
//! change through [`FormView`]. Neither seam knows about the DOM, so the whole
//! flow runs under native tests with fakes.
//!
//! - `descriptions`: soil name to description text, in page order
//! - `state`: the mutually exclusive panels and the results view model
//! - `controller`: select/submit handlers and the fetch flow
//! - `api`: the endpoint seam; `http` adds a reqwest client behind the `api` feature

pub mod api;
pub mod controller;
pub mod descriptions;
pub mod error;
#[cfg(feature = "api")]
pub mod http;
pub mod state;
pub mod view;

pub use api::CropApi;
pub use controller::{FormController, SubmitOutcome};
pub use descriptions::SoilDescriptions;
pub use error::FormError;
pub use state::{CropCard, ResultsView, UiState};
pub use view::FormView;
