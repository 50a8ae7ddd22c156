//! Results panel: soil fertilizer block and one card per crop.

use dioxus::prelude::*;
use scr_form::{CropCard, ResultsView};
use scr_soil::Fertilizer;

#[derive(Props, Clone, PartialEq)]
pub struct CropResultsProps {
    pub view: ResultsView,
}

#[component]
pub fn CropResults(props: CropResultsProps) -> Element {
    let view = props.view;

    rsx! {
        div {
            id: "resultsContainer",
            h4 {
                class: "mb-3",
                "Recommended crops for "
                span { id: "selectedSoilType", "{view.soil}" }
                " soil"
            }
            div {
                id: "cropResults",
                class: "row g-3",
                if let Some(fertilizer) = view.soil_fertilizer.clone() {
                    SoilFertilizerBlock { soil: view.soil.clone(), fertilizer }
                }
                if let Some(notice) = view.notice() {
                    div {
                        class: "col-12",
                        div { class: "alert alert-warning", "{notice}" }
                    }
                }
                for card in view.cards.iter() {
                    CropCardView { key: "{card.name}", card: card.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SoilFertilizerBlockProps {
    pub soil: String,
    pub fertilizer: Fertilizer,
}

#[component]
pub fn SoilFertilizerBlock(props: SoilFertilizerBlockProps) -> Element {
    rsx! {
        div {
            class: "col-12 mb-3",
            div {
                class: "alert alert-info border-0",
                h5 {
                    i { class: "fas fa-seedling me-2" }
                    "Organic Fertilizers for {props.soil} Soil"
                }
                div {
                    class: "row mt-2",
                    div {
                        class: "col-md-6",
                        div {
                            class: "mb-2",
                            strong { "Ready-made Organic:" }
                            " {props.fertilizer.organic}"
                        }
                    }
                    div {
                        class: "col-md-6",
                        div {
                            strong { "Homemade Options:" }
                            " {props.fertilizer.homemade}"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CropCardViewProps {
    pub card: CropCard,
}

/// One crop with its score bar, coloured by tier.
#[component]
pub fn CropCardView(props: CropCardViewProps) -> Element {
    let card = props.card;
    let bar_class = format!("progress-bar {}", card.tier.css_class());
    let width = card.bar_width();

    rsx! {
        div {
            class: "col-md-6 col-lg-4",
            div {
                class: "card h-100 border-0 crop-card",
                div {
                    class: "card-body",
                    div {
                        class: "d-flex align-items-center mb-2",
                        i { class: "fas fa-plant-wilt text-teal me-2" }
                        h5 { class: "card-title mb-0", "{card.name}" }
                    }
                    div {
                        class: "crop-score-container mt-2",
                        div {
                            class: "progress",
                            div {
                                class: "{bar_class}",
                                role: "progressbar",
                                style: "width: {width}%;",
                                "aria-valuenow": "{card.score}",
                                "aria-valuemin": "0",
                                "aria-valuemax": "100",
                                "{card.score}%"
                            }
                        }
                        small { class: "text-muted", "Suitability Score" }
                    }
                    if let Some(fertilizer) = card.fertilizer.clone() {
                        div {
                            class: "mt-3",
                            h6 {
                                class: "text-info mb-2",
                                i { class: "fas fa-seedling me-1" }
                                "Organic Fertilizers:"
                            }
                            div {
                                class: "small",
                                div { strong { "Ready-made:" } " {fertilizer.organic}" }
                                div { strong { "Homemade:" } " {fertilizer.homemade}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
