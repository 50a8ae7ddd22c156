use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use log::{debug, error};
use scr_soil::recommend::recommend;
use scr_soil::response::SOIL_TO_CROPS_PATH;
use scr_soil::{Catalog, CatalogError, CropRecommendationResponse, SoilRequest};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::page::render_index;

/// Message returned for a missing, malformed or unknown soil.
pub const INVALID_SOIL_MESSAGE: &str = "Invalid soil type";

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    bundle_script: Arc<str>,
}

impl AppState {
    pub fn new(catalog: Catalog, bundle_script: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            bundle_script: Arc::from(bundle_script),
        }
    }
}

/// Every route answers cross-origin requests, so pages served elsewhere can
/// call the recommendation endpoint.
pub fn build_router(state: AppState, assets_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route(SOIL_TO_CROPS_PATH, post(soil_to_crops));
    let router = match assets_dir {
        Some(dir) => router.nest_service("/assets", ServeDir::new(dir)),
        None => router,
    };
    router.layer(CorsLayer::permissive()).with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_index(state.catalog.soils(), &state.bundle_script)
        .map(Html)
        .map_err(|e| {
            error!("Error rendering index page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

async fn healthz() -> &'static str {
    "ok"
}

/// The body is decoded by hand so a bad body answers with the same JSON error
/// shape as an unknown soil.
async fn soil_to_crops(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<CropRecommendationResponse>) {
    let request: SoilRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!("rejecting soil-to-crops body: {}", e);
            return invalid_soil();
        }
    };
    debug!("Received request for soil: {}", request.soil);

    match recommend(&state.catalog, &request.soil) {
        Ok(response) => {
            debug!(
                "Returning {} crops for {}",
                response.recommended_crops.len(),
                response.soil
            );
            (StatusCode::OK, Json(response))
        }
        Err(CatalogError::InvalidSoil(_)) => invalid_soil(),
        Err(e) => {
            error!("Error in soil_to_crops: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CropRecommendationResponse::error(e.to_string())),
            )
        }
    }
}

fn invalid_soil() -> (StatusCode, Json<CropRecommendationResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(CropRecommendationResponse::error(INVALID_SOIL_MESSAGE)),
    )
}
