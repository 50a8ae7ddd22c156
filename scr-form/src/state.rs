//! The panels of the form and the view model rendered into the results panel.

use scr_soil::{CropRecommendationResponse, Fertilizer, ScoreTier};

/// Shown in place of crop cards when the response lists none.
pub const NO_CROPS_NOTICE: &str = "No suitable crops found for this soil type.";

/// Which panel is visible. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// Page just loaded; never re-entered
    #[default]
    Initial,
    /// Request in flight, spinner showing
    Loading,
    Error(String),
    Results(ResultsView),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// A crop card ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropCard {
    pub name: String,
    pub score: i32,
    pub tier: ScoreTier,
    pub fertilizer: Option<Fertilizer>,
}

impl CropCard {
    /// Progress bar width in percent.
    pub fn bar_width(&self) -> i32 {
        self.score.clamp(0, 100)
    }
}

/// Everything the results panel shows for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub soil: String,
    pub soil_fertilizer: Option<Fertilizer>,
    pub cards: Vec<CropCard>,
}

impl ResultsView {
    /// The notice to show instead of cards, if there are none.
    pub fn notice(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(NO_CROPS_NOTICE)
    }
}

impl From<&CropRecommendationResponse> for ResultsView {
    fn from(response: &CropRecommendationResponse) -> Self {
        let cards = response
            .recommended_crops
            .iter()
            .map(|crop| CropCard {
                name: crop.name.clone(),
                score: crop.score,
                tier: crop.tier(),
                fertilizer: crop.fertilizer.clone(),
            })
            .collect();
        Self {
            soil: response.soil.clone(),
            soil_fertilizer: response.soil_fertilizer.clone(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scr_soil::CropEntry;

    fn crop(name: &str, score: i32) -> CropEntry {
        CropEntry {
            name: name.to_string(),
            score,
            fertilizer: None,
        }
    }

    #[test]
    fn tiers_follow_scores() {
        let response = CropRecommendationResponse {
            soil: "Black".to_string(),
            recommended_crops: vec![crop("Cotton", 95), crop("Wheat", 65), crop("Millet", 40)],
            ..Default::default()
        };
        let view = ResultsView::from(&response);
        let tiers: Vec<ScoreTier> = view.cards.iter().map(|c| c.tier).collect();
        assert_eq!(tiers, vec![ScoreTier::High, ScoreTier::Mid, ScoreTier::Low]);
        assert_eq!(view.notice(), None);
    }

    #[test]
    fn empty_crops_show_notice() {
        let response = CropRecommendationResponse {
            soil: "Black".to_string(),
            ..Default::default()
        };
        let view = ResultsView::from(&response);
        assert!(view.cards.is_empty());
        assert_eq!(view.notice(), Some(NO_CROPS_NOTICE));
    }

    #[test]
    fn bar_width_is_clamped() {
        let response = CropRecommendationResponse {
            recommended_crops: vec![crop("Rice", 130), crop("Jute", -5)],
            ..Default::default()
        };
        let view = ResultsView::from(&response);
        assert_eq!(view.cards[0].bar_width(), 100);
        assert_eq!(view.cards[1].bar_width(), 0);
    }
}
