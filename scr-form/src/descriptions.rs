//! Soil descriptions scanned from the page's accordion.

/// Suffix on accordion labels ("Black Soil") that is not part of the soil name.
const LABEL_SUFFIX: &str = " Soil";

/// Turn an accordion label into the soil name used by the dropdown.
///
/// Trims whitespace and drops the first `" Soil"`.
pub fn soil_name_from_label(label: &str) -> String {
    label.trim().replacen(LABEL_SUFFIX, "", 1)
}

/// Soil name to description text. Built once, read-only afterwards.
///
/// Keeps the order entries were scanned in; the dropdown lists soils that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoilDescriptions {
    entries: Vec<(String, String)>,
}

impl SoilDescriptions {
    /// Build from `(label, description)` pairs as they appear on the page.
    ///
    /// A repeated soil keeps its first position and takes the later text.
    pub fn from_entries<I, L, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, D)>,
        L: AsRef<str>,
        D: AsRef<str>,
    {
        let mut descriptions = Self::default();
        for (label, text) in entries {
            let name = soil_name_from_label(label.as_ref());
            let text = text.as_ref().trim().to_string();
            match descriptions.entries.iter_mut().find(|(n, _)| *n == name) {
                Some(existing) => existing.1 = text,
                None => descriptions.entries.push((name, text)),
            }
        }
        descriptions
    }

    pub fn get(&self, soil: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == soil)
            .map(|(_, text)| text.as_str())
    }

    /// Soil names in page order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
