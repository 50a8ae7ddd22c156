use csv::ReaderBuilder;

use crate::crop::field;
use crate::error::Result;
use crate::fertilizer::Fertilizer;

/// Embedded CSV of soil types: name, description, organic and homemade fertilizer.
pub static CSV_SOILS: &str = include_str!("../../fixtures/soils.csv");

/// A soil type the service can recommend crops for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soil {
    pub name: String,
    pub description: String,
    /// Fertilizer advice for the soil itself, independent of the crop
    pub fertilizer: Fertilizer,
}

impl Soil {
    /// Label shown on accordion headers, e.g. "Black Soil".
    pub fn display_label(&self) -> String {
        format!("{} Soil", self.name)
    }

    /// Parse a CSV string of soils.
    ///
    /// Expected CSV columns: name, description, organic, homemade
    pub fn parse_soil_csv(csv_object: &str) -> Result<Vec<Soil>> {
        let mut soils = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            let column = |idx, column| field(&rho, idx, "soils.csv", column);
            soils.push(Soil {
                name: column(0, "name")?,
                description: column(1, "description")?,
                fertilizer: Fertilizer::new(column(2, "organic")?, column(3, "homemade")?),
            });
        }
        Ok(soils)
    }
}
