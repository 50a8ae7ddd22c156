//! Soil to Crop Recommendation Form
//!
//! Mounts into `#soil-form-root` on the page served by `scr-server`. The
//! server renders the soil accordion; this app scans it for descriptions,
//! renders the soil dropdown and posts selections to `/api/soil-to-crops`.

use dioxus::prelude::*;
use scr_form_ui::components::SoilForm;
use scr_form_ui::state::AppState;

/// DOM id of the element the server leaves for this app.
const FORM_ROOT_ID: &str = "soil-form-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("starting soil form");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(FORM_ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        SoilForm {}
    }
}
