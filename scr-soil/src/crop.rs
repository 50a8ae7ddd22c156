use csv::ReaderBuilder;

use crate::error::{CatalogError, Result};
use crate::fertilizer::Fertilizer;

/// Embedded CSV of every crop label the recommender knows about.
pub static CSV_CROPS: &str = include_str!("../../fixtures/crops.csv");

/// Embedded CSV of (soil, crop) rows, best suited crop first within each soil.
pub static CSV_SOIL_CROPS: &str = include_str!("../../fixtures/soil_crops.csv");

/// Embedded CSV of crop-specific fertilizer advice, including a `default` row.
pub static CSV_CROP_FERTILIZERS: &str = include_str!("../../fixtures/crop_fertilizers.csv");

/// Key of the fallback row in the crop fertilizer table.
pub const DEFAULT_FERTILIZER_KEY: &str = "default";

/// Trimmed text of column `idx`, or `MissingColumn` naming the fixture.
pub(crate) fn field(
    record: &csv::StringRecord,
    idx: usize,
    fixture: &'static str,
    column: &'static str,
) -> Result<String> {
    record
        .get(idx)
        .map(|s| s.trim().to_string())
        .ok_or(CatalogError::MissingColumn { fixture, column })
}

/// Parse the crop label list. Blank lines are skipped.
pub fn parse_crop_labels(csv_object: &str) -> Result<Vec<String>> {
    let mut labels = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let label = field(&row?, 0, "crops.csv", "crop")?;
        if !label.is_empty() {
            labels.push(label);
        }
    }
    Ok(labels)
}

/// Parse (soil, crop) rows in file order.
pub fn parse_soil_crops(csv_object: &str) -> Result<Vec<(String, String)>> {
    let mut rows = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let rho = row?;
        rows.push((
            field(&rho, 0, "soil_crops.csv", "soil")?,
            field(&rho, 1, "soil_crops.csv", "crop")?,
        ));
    }
    Ok(rows)
}

/// Parse crop fertilizer rows.
///
/// Expected CSV columns: crop, organic, homemade
pub fn parse_crop_fertilizers(csv_object: &str) -> Result<Vec<(String, Fertilizer)>> {
    let mut rows = Vec::new();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes());
    for row in rdr.records() {
        let rho = row?;
        let crop = field(&rho, 0, "crop_fertilizers.csv", "crop")?;
        let organic = field(&rho, 1, "crop_fertilizers.csv", "organic")?;
        let homemade = field(&rho, 2, "crop_fertilizers.csv", "homemade")?;
        rows.push((crop, Fertilizer::new(organic, homemade)));
    }
    Ok(rows)
}
