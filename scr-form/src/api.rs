//! The seam to `POST /api/soil-to-crops`.

use async_trait::async_trait;
use scr_soil::CropRecommendationResponse;

use crate::error::FormError;

/// Fetches recommendations for a soil.
///
/// Implementations report transport, status and JSON failures. An `error`
/// field in an otherwise valid body is left for the controller to handle.
/// Futures are not `Send`: the browser implementation holds JS values.
#[async_trait(?Send)]
pub trait CropApi {
    async fn recommend(&self, soil: &str) -> Result<CropRecommendationResponse, FormError>;
}

/// Decode a response body.
pub fn parse_response_body(body: &str) -> Result<CropRecommendationResponse, FormError> {
    serde_json::from_str(body).map_err(|e| FormError::Parse(e.to_string()))
}
