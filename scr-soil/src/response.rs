//! Request and response bodies of `POST /api/soil-to-crops`.

use serde::{Deserialize, Serialize};

use crate::fertilizer::Fertilizer;
use crate::tier::ScoreTier;

/// Path of the recommendation endpoint.
pub const SOIL_TO_CROPS_PATH: &str = "/api/soil-to-crops";

/// Request body: `{"soil": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilRequest {
    pub soil: String,
}

/// One recommended crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropEntry {
    pub name: String,
    /// Suitability score, 0-100
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<Fertilizer>,
}

impl CropEntry {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Response body. An application-level failure carries only `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecommendationResponse {
    #[serde(default)]
    pub soil: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_fertilizer: Option<Fertilizer>,
    #[serde(default)]
    pub recommended_crops: Vec<CropEntry>,
}

impl CropRecommendationResponse {
    /// Error-only body, as returned with a 4xx/5xx status.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_deserializes() {
        let body: CropRecommendationResponse =
            serde_json::from_str(r#"{"soil": "Black"}"#).unwrap();
        assert_eq!(body.soil, "Black");
        assert!(body.error.is_none());
        assert!(body.soil_fertilizer.is_none());
        assert!(body.recommended_crops.is_empty());
    }

    #[test]
    fn full_body_deserializes() {
        let body: CropRecommendationResponse = serde_json::from_str(
            r#"{
                "soil": "Red",
                "soil_fertilizer": {"organic": "Bone meal", "homemade": "Wood ash"},
                "recommended_crops": [
                    {"name": "Pulses", "score": 95, "fertilizer": {"organic": "a", "homemade": "b"}},
                    {"name": "Millet", "score": 65}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(body.recommended_crops.len(), 2);
        assert_eq!(body.recommended_crops[0].tier(), ScoreTier::High);
        assert!(body.recommended_crops[1].fertilizer.is_none());
        assert_eq!(body.soil_fertilizer.unwrap().homemade, "Wood ash");
    }

    #[test]
    fn error_body_serializes_without_empty_fields() {
        let json = serde_json::to_value(CropRecommendationResponse::error("Invalid soil type"))
            .unwrap();
        assert_eq!(json["error"], "Invalid soil type");
        assert!(json.get("soil_fertilizer").is_none());
    }
}
