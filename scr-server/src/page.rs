//! Index page rendering with Askama.

use askama::Template;
use scr_soil::soil::Soil;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub soils: &'a [Soil],
    pub bundle_script: &'a str,
}

/// Render the index page.
pub fn render_index(soils: &[Soil], bundle_script: &str) -> askama::Result<String> {
    IndexTemplate {
        soils,
        bundle_script,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scr_soil::Catalog;

    #[test]
    fn accordion_lists_every_soil() {
        let catalog = Catalog::embedded().unwrap();
        let html = render_index(catalog.soils(), "/assets/scr-web.js").unwrap();
        assert!(html.contains(r#"id="soilAccordion""#));
        assert!(html.contains(r#"id="soil-form-root""#));
        assert_eq!(html.matches(r#"class="accordion-item""#).count(), 8);
        assert!(html.contains(">Laterite Soil</button>"));
        assert!(html.contains(r#"import init from "/assets/scr-web.js";"#));
    }

    #[test]
    fn descriptions_are_escaped() {
        let soils = vec![Soil {
            name: "Test".to_string(),
            description: "<b>bold</b> & more".to_string(),
            fertilizer: scr_soil::Fertilizer::new("a", "b"),
        }];
        let html = render_index(&soils, "/x.js").unwrap();
        assert!(html.contains("&lt;b&gt;bold"));
        assert!(html.contains("&amp; more"));
        assert!(!html.contains("<b>bold"));
    }
}
