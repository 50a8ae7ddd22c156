//! The soil form and whichever result panel is current.

use std::rc::Rc;

use crate::components::{
    CropResults, ErrorDisplay, InitialMessage, LoadingSpinner, SoilDescriptionPanel, SoilSelector,
};
use crate::dom;
use crate::fetch::FetchCropApi;
use crate::state::AppState;
use dioxus::prelude::*;
use log::debug;
use scr_form::{FormController, UiState};

type Controller = FormController<FetchCropApi, AppState>;

/// Form plus result panels. Expects an [`AppState`] in context.
///
/// The controller is built once on first render, after scanning the page's
/// soil accordion.
#[component]
pub fn SoilForm() -> Element {
    let mut state = use_context::<AppState>();
    let controller: Rc<Controller> = use_hook(|| {
        let descriptions = dom::scan_soil_accordion();
        Rc::new(FormController::new(FetchCropApi::new(), state, descriptions))
    });
    let soils: Vec<String> = controller
        .descriptions()
        .names()
        .map(str::to_string)
        .collect();

    let select_controller = controller.clone();
    let on_select = move |value: String| {
        select_controller.on_soil_selected(&value);
        state.selected_soil.set(value);
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let soil = (state.selected_soil)();
        let controller = controller.clone();
        spawn(async move {
            let outcome = controller.on_submit(&soil).await;
            debug!("submission for {:?} ended: {:?}", soil, outcome);
        });
    };

    let panel = match (state.ui)() {
        UiState::Initial => rsx! { InitialMessage {} },
        UiState::Loading => rsx! { LoadingSpinner {} },
        UiState::Error(message) => rsx! { ErrorDisplay { message } },
        UiState::Results(view) => rsx! { CropResults { view } },
    };

    rsx! {
        div {
            class: "row",
            div {
                class: "col-lg-4 mb-4",
                form {
                    id: "soilForm",
                    onsubmit: on_submit,
                    SoilSelector { soils, on_select }
                    SoilDescriptionPanel {}
                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-100 mt-3",
                        "Get Crop Recommendations"
                    }
                }
            }
            div {
                class: "col-lg-8",
                {panel}
            }
        }
    }
}
