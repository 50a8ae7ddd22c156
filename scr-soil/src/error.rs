/// Error types for the soil catalog
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to parse one of the embedded CSV fixtures
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A CSV row is missing a column
    #[error("Missing column {column} in {fixture}")]
    MissingColumn {
        fixture: &'static str,
        column: &'static str,
    },

    /// A crop row references a soil that is not in the soil table
    #[error("Crop list references unknown soil: {0}")]
    UnknownSoilReference(String),

    /// The crop fertilizer table has no `default` row
    #[error("Crop fertilizer table has no default row")]
    MissingDefaultFertilizer,

    /// The requested soil is not in the catalog
    #[error("Invalid soil type")]
    InvalidSoil(String),
}

/// Type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
