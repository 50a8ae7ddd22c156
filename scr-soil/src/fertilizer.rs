use serde::{Deserialize, Serialize};

/// A pair of organic fertilizer suggestions: one ready-made, one homemade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fertilizer {
    pub organic: String,
    pub homemade: String,
}

impl Fertilizer {
    pub fn new(organic: impl Into<String>, homemade: impl Into<String>) -> Self {
        Self {
            organic: organic.into(),
            homemade: homemade.into(),
        }
    }
}
