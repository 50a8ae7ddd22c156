//! `CropApi` over the browser's `fetch`.

use async_trait::async_trait;
use log::debug;
use scr_form::api::parse_response_body;
use scr_form::{CropApi, FormError};
use scr_soil::response::SOIL_TO_CROPS_PATH;
use scr_soil::{CropRecommendationResponse, SoilRequest};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Posts to the page's own origin.
#[derive(Debug, Clone)]
pub struct FetchCropApi {
    endpoint: String,
}

impl FetchCropApi {
    pub fn new() -> Self {
        Self::with_endpoint(SOIL_TO_CROPS_PATH)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl CropApi for FetchCropApi {
    async fn recommend(&self, soil: &str) -> Result<CropRecommendationResponse, FormError> {
        let body = serde_json::to_string(&SoilRequest {
            soil: soil.to_string(),
        })
        .map_err(|e| FormError::Parse(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));
        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window =
            web_sys::window().ok_or_else(|| FormError::Transport("no window".to_string()))?;
        debug!("POST {} soil={}", self.endpoint, soil);
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(FormError::Network {
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        parse_response_body(&text.as_string().unwrap_or_default())
    }
}

/// A rejected fetch carries a JS `Error` (usually a `TypeError`).
fn js_error(value: JsValue) -> FormError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    FormError::Transport(message)
}
