//! Ranking of crops for a soil.
//!
//! A soil's crop list is ordered best-first in the fixtures. Crops that are not
//! known labels are dropped, then each remaining crop is scored by its rank.

use log::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::response::{CropEntry, CropRecommendationResponse};

/// Score given to the best ranked crop.
pub const TOP_SCORE: i32 = 95;
/// Score lost per rank position.
pub const SCORE_STEP: i32 = 7;

/// Score of the crop at `rank` (0-based), clamped to 0-100.
pub fn score_for_rank(rank: usize) -> i32 {
    let rank = i32::try_from(rank).unwrap_or(i32::MAX);
    TOP_SCORE
        .saturating_sub(rank.saturating_mul(SCORE_STEP))
        .clamp(0, 100)
}

/// Build the full recommendation for `soil`.
pub fn recommend(catalog: &Catalog, soil: &str) -> Result<CropRecommendationResponse> {
    let entry = catalog
        .soil(soil)
        .ok_or_else(|| CatalogError::InvalidSoil(soil.to_string()))?;

    let mut crops: Vec<CropEntry> = catalog
        .crops_for(soil)
        .iter()
        .filter(|crop| {
            let known = catalog.is_known_crop(crop);
            if !known {
                debug!("skipping unlabelled crop {} for {}", crop, soil);
            }
            known
        })
        .enumerate()
        .map(|(rank, crop)| CropEntry {
            name: crop.clone(),
            score: score_for_rank(rank),
            fertilizer: Some(catalog.crop_fertilizer(crop).clone()),
        })
        .collect();
    // Stable, so equal scores keep fixture order.
    crops.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(CropRecommendationResponse {
        soil: entry.name.clone(),
        error: None,
        soil_description: Some(entry.description.clone()),
        soil_fertilizer: Some(entry.fertilizer.clone()),
        recommended_crops: crops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::ScoreTier;

    #[test]
    fn scores_decrease_by_rank() {
        assert_eq!(score_for_rank(0), 95);
        assert_eq!(score_for_rank(1), 88);
        assert_eq!(score_for_rank(7), 46);
        assert_eq!(score_for_rank(50), 0);
        assert_eq!(score_for_rank(usize::MAX), 0);
    }

    #[test]
    fn alluvial_recommendation() {
        let catalog = Catalog::embedded().unwrap();
        let response = recommend(&catalog, "Alluvial").unwrap();
        assert_eq!(response.soil, "Alluvial");
        assert_eq!(response.recommended_crops.len(), 8);
        assert_eq!(response.recommended_crops[0].name, "Rice");
        assert_eq!(response.recommended_crops[0].score, 95);
        assert_eq!(
            response.soil_fertilizer.unwrap().organic,
            "Cow dung compost and vermicompost"
        );
        let tiers: Vec<ScoreTier> = response.recommended_crops.iter().map(|c| c.tier()).collect();
        assert!(tiers.contains(&ScoreTier::High));
        assert!(tiers.contains(&ScoreTier::Mid));
        assert!(tiers.contains(&ScoreTier::Low));
    }

    #[test]
    fn unlabelled_crops_are_dropped() {
        let catalog = Catalog::embedded().unwrap();
        let response = recommend(&catalog, "Peaty").unwrap();
        let names: Vec<&str> = response
            .recommended_crops
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rice", "Potato", "Onion", "Tomato", "Sugarcane", "Taro"]);
    }

    #[test]
    fn sorted_by_score_descending() {
        let catalog = Catalog::embedded().unwrap();
        let response = recommend(&catalog, "Saline").unwrap();
        assert!(response
            .recommended_crops
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn every_crop_has_fertilizer() {
        let catalog = Catalog::embedded().unwrap();
        let response = recommend(&catalog, "Arid").unwrap();
        assert!(response.recommended_crops.iter().all(|c| c.fertilizer.is_some()));
    }

    #[test]
    fn unknown_soil_is_invalid() {
        let catalog = Catalog::embedded().unwrap();
        let err = recommend(&catalog, "Clay").unwrap_err();
        assert_eq!(err.to_string(), "Invalid soil type");
    }
}
