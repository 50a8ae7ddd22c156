//! The soil catalog assembled from the embedded CSV fixtures.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::crop::{
    parse_crop_fertilizers, parse_crop_labels, parse_soil_crops, CSV_CROPS,
    CSV_CROP_FERTILIZERS, CSV_SOIL_CROPS, DEFAULT_FERTILIZER_KEY,
};
use crate::error::{CatalogError, Result};
use crate::fertilizer::Fertilizer;
use crate::soil::{Soil, CSV_SOILS};

/// Read-only lookup tables for soils, their crops and fertilizer advice.
#[derive(Debug, Clone)]
pub struct Catalog {
    soils: Vec<Soil>,
    crop_labels: HashSet<String>,
    soil_crops: HashMap<String, Vec<String>>,
    crop_fertilizers: HashMap<String, Fertilizer>,
    default_fertilizer: Fertilizer,
}

impl Catalog {
    /// Build the catalog from the fixtures compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_csv(CSV_SOILS, CSV_CROPS, CSV_SOIL_CROPS, CSV_CROP_FERTILIZERS)
    }

    /// Build a catalog from CSV strings.
    ///
    /// Every soil named in `soil_crops` must appear in `soils`, and
    /// `crop_fertilizers` must carry a `default` row.
    pub fn from_csv(
        soils: &str,
        crops: &str,
        soil_crops: &str,
        crop_fertilizers: &str,
    ) -> Result<Self> {
        let soils = Soil::parse_soil_csv(soils)?;
        let crop_labels: HashSet<String> = parse_crop_labels(crops)?.into_iter().collect();

        let mut by_soil: HashMap<String, Vec<String>> = HashMap::new();
        for (soil, crop) in parse_soil_crops(soil_crops)? {
            if !soils.iter().any(|s| s.name == soil) {
                return Err(CatalogError::UnknownSoilReference(soil));
            }
            by_soil.entry(soil).or_default().push(crop);
        }

        let mut fertilizers: HashMap<String, Fertilizer> =
            parse_crop_fertilizers(crop_fertilizers)?.into_iter().collect();
        let default_fertilizer = fertilizers
            .remove(DEFAULT_FERTILIZER_KEY)
            .ok_or(CatalogError::MissingDefaultFertilizer)?;

        debug!(
            "catalog loaded: {} soils, {} crop labels, {} crop fertilizers",
            soils.len(),
            crop_labels.len(),
            fertilizers.len()
        );

        Ok(Self {
            soils,
            crop_labels,
            soil_crops: by_soil,
            crop_fertilizers: fertilizers,
            default_fertilizer,
        })
    }

    /// All soils in fixture order.
    pub fn soils(&self) -> &[Soil] {
        &self.soils
    }

    pub fn soil(&self, name: &str) -> Option<&Soil> {
        self.soils.iter().find(|s| s.name == name)
    }

    /// Crops listed for a soil, best suited first. Includes crops that are not
    /// known labels; see [`Catalog::is_known_crop`].
    pub fn crops_for(&self, soil: &str) -> &[String] {
        self.soil_crops.get(soil).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_known_crop(&self, crop: &str) -> bool {
        self.crop_labels.contains(crop)
    }

    /// Crop-specific fertilizer advice, or the default row.
    pub fn crop_fertilizer(&self, crop: &str) -> &Fertilizer {
        self.crop_fertilizers
            .get(crop)
            .unwrap_or(&self.default_fertilizer)
    }
}
