//! Drives the form controller against a live server over HTTP.

use std::cell::RefCell;

use scr_form::http::HttpCropApi;
use scr_form::{FormController, FormView, SoilDescriptions, SubmitOutcome, UiState};
use scr_server::{build_router, AppState};
use scr_soil::{Catalog, ScoreTier};

#[derive(Default)]
struct RecordingView {
    states: RefCell<Vec<UiState>>,
    description: RefCell<Option<String>>,
}

impl FormView for RecordingView {
    fn set_description(&self, text: Option<String>) {
        *self.description.borrow_mut() = text;
    }

    fn set_state(&self, state: UiState) {
        self.states.borrow_mut().push(state);
    }
}

async fn spawn_server() -> String {
    let catalog = Catalog::embedded().expect("catalog");
    let app = build_router(AppState::new(catalog, "/assets/scr-web.js"), None);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{}", addr)
}

fn page_descriptions() -> SoilDescriptions {
    let catalog = Catalog::embedded().expect("catalog");
    SoilDescriptions::from_entries(
        catalog
            .soils()
            .iter()
            .map(|s| (s.display_label(), s.description.clone())),
    )
}

#[tokio::test]
async fn submit_renders_results_from_server() {
    let base = spawn_server().await;
    let form = FormController::new(
        HttpCropApi::new(&base),
        RecordingView::default(),
        page_descriptions(),
    );

    form.on_soil_selected("Laterite");
    assert_eq!(
        form.view().description.borrow().as_deref(),
        Some("Rich in iron and aluminum, formed in monsoon regions, requires fertilizers")
    );

    let outcome = form.on_submit("Laterite").await;
    assert_eq!(outcome, SubmitOutcome::Rendered);

    let states = form.view().states.borrow();
    assert_eq!(states[0], UiState::Loading);
    match &states[1] {
        UiState::Results(view) => {
            assert_eq!(view.soil, "Laterite");
            assert_eq!(view.cards[0].name, "Tea");
            assert_eq!(view.cards[0].tier, ScoreTier::High);
            assert!(view.soil_fertilizer.is_some());
        }
        other => panic!("expected results, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_soil_shows_network_error() {
    let base = spawn_server().await;
    let form = FormController::new(
        HttpCropApi::new(&base),
        RecordingView::default(),
        page_descriptions(),
    );

    let outcome = form.on_submit("Clay").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Error: Network response was not ok".to_string())
    );
}

#[tokio::test]
async fn unreachable_server_shows_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let form = FormController::new(
        HttpCropApi::new(&format!("http://{}", addr)),
        RecordingView::default(),
        page_descriptions(),
    );
    match form.on_submit("Black").await {
        SubmitOutcome::Failed(message) => assert!(message.starts_with("Error: ")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(!form.view().states.borrow().last().expect("state").is_loading());
}
