//! Core types for the soil-to-crops recommender.
//!
//! - `catalog`: soils, crop labels and fertilizer advice embedded from `fixtures/*.csv`
//! - `recommend`: ranks the crops of a soil into a [`CropRecommendationResponse`]
//! - `response`: request/response shapes of `POST /api/soil-to-crops`
//! - `tier`: score-to-colour bucketing used when rendering crop cards

pub mod catalog;
pub mod crop;
pub mod error;
pub mod fertilizer;
pub mod recommend;
pub mod response;
pub mod soil;
pub mod tier;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use fertilizer::Fertilizer;
pub use response::{CropEntry, CropRecommendationResponse, SoilRequest};
pub use tier::ScoreTier;
