//! Reads soil descriptions out of the page the server rendered.

use log::{debug, warn};
use scr_form::SoilDescriptions;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// One entry per soil in the server-rendered accordion.
pub const ACCORDION_ITEMS: &str = "#soilAccordion .accordion-item";
const ITEM_LABEL: &str = ".accordion-button";
const ITEM_TEXT: &str = ".accordion-body p";

/// Scan the accordion into soil descriptions. Items missing a label or a body
/// are skipped; a page without the accordion yields no descriptions.
pub fn scan_soil_accordion() -> SoilDescriptions {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document available, soil descriptions left empty");
        return SoilDescriptions::default();
    };
    let items = match document.query_selector_all(ACCORDION_ITEMS) {
        Ok(items) => items,
        Err(e) => {
            warn!("failed to query {}: {:?}", ACCORDION_ITEMS, e);
            return SoilDescriptions::default();
        }
    };

    let mut entries = Vec::new();
    for idx in 0..items.length() {
        let Some(item) = items.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match (text_of(&item, ITEM_LABEL), text_of(&item, ITEM_TEXT)) {
            (Some(label), Some(text)) => entries.push((label, text)),
            _ => debug!("skipping accordion item {} without label or body", idx),
        }
    }
    SoilDescriptions::from_entries(entries)
}

fn text_of(item: &Element, selector: &str) -> Option<String> {
    item.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}
