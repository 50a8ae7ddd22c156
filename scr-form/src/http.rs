//! Native client for the recommendation endpoint.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use scr_soil::response::SOIL_TO_CROPS_PATH;
use scr_soil::{CropRecommendationResponse, SoilRequest};

use crate::api::{parse_response_body, CropApi};
use crate::error::FormError;

/// [`CropApi`] over reqwest.
#[derive(Debug, Clone)]
pub struct HttpCropApi {
    client: Client,
    endpoint: String,
}

impl HttpCropApi {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SOIL_TO_CROPS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl CropApi for HttpCropApi {
    async fn recommend(&self, soil: &str) -> Result<CropRecommendationResponse, FormError> {
        debug!("POST {} soil={}", self.endpoint, soil);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SoilRequest {
                soil: soil.to_string(),
            })
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::Network {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;
        parse_response_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            HttpCropApi::new("http://localhost:5000/").endpoint(),
            "http://localhost:5000/api/soil-to-crops"
        );
    }
}
