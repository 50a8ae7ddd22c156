//! Select and submit handlers for the soil form.
//!
//! Submissions are numbered. Only the newest one may change the page when it
//! settles; an older request that finishes later is dropped without touching
//! the panels or the spinner.

use std::cell::Cell;

use log::{debug, info, warn};
use scr_soil::CropRecommendationResponse;

use crate::api::CropApi;
use crate::descriptions::SoilDescriptions;
use crate::error::FormError;
use crate::state::{ResultsView, UiState};
use crate::view::FormView;

/// How a call to [`FormController::on_submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing selected, no request was made
    Invalid,
    /// Results panel shown
    Rendered,
    /// Error panel shown with this message
    Failed(String),
    /// A newer submission started before this one settled
    Superseded,
}

pub struct FormController<A, V> {
    api: A,
    view: V,
    descriptions: SoilDescriptions,
    generation: Cell<u64>,
}

impl<A: CropApi, V: FormView> FormController<A, V> {
    /// Wire the controller to a view and an endpoint. `descriptions` is the
    /// scan of the page's soil accordion.
    pub fn new(api: A, view: V, descriptions: SoilDescriptions) -> Self {
        info!("soil form ready with {} soil descriptions", descriptions.len());
        Self {
            api,
            view,
            descriptions,
            generation: Cell::new(0),
        }
    }

    pub fn descriptions(&self) -> &SoilDescriptions {
        &self.descriptions
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Dropdown changed. A soil with blank description text keeps the panel hidden.
    pub fn on_soil_selected(&self, value: &str) {
        let text = if value.is_empty() {
            None
        } else {
            self.descriptions
                .get(value)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        self.view.set_description(text);
    }

    /// Form submitted with the dropdown's current value.
    pub async fn on_submit(&self, selected_soil: &str) -> SubmitOutcome {
        let generation = self.next_generation();

        if selected_soil.is_empty() {
            let message = FormError::Validation.user_message();
            self.show_error(message);
            return SubmitOutcome::Invalid;
        }

        self.view.set_state(UiState::Loading);
        let result = self.fetch_crop_recommendations(selected_soil).await;

        if generation != self.generation.get() {
            debug!(
                "dropping response for {} (submission {} superseded by {})",
                selected_soil,
                generation,
                self.generation.get()
            );
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                self.render(&response);
                SubmitOutcome::Rendered
            }
            Err(e) => {
                warn!("recommendation request for {} failed: {}", selected_soil, e);
                let message = e.user_message();
                self.show_error(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// One round-trip to the endpoint. A non-empty `error` field in the body is
    /// a failure; an empty one is ignored.
    pub async fn fetch_crop_recommendations(
        &self,
        soil: &str,
    ) -> Result<CropRecommendationResponse, FormError> {
        let mut response = self.api.recommend(soil).await?;
        if let Some(error) = response.error.take().filter(|e| !e.is_empty()) {
            return Err(FormError::Remote(error));
        }
        Ok(response)
    }

    /// Replace the results panel with `response` and show it.
    pub fn render(&self, response: &CropRecommendationResponse) {
        let view = ResultsView::from(response);
        debug!("rendering {} crop cards for {}", view.cards.len(), view.soil);
        self.view.set_state(UiState::Results(view));
    }

    /// Hide spinner, initial message and results; show `message`.
    pub fn show_error(&self, message: String) {
        self.view.set_state(UiState::Error(message));
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}
