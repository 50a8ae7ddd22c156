//! Browser side of the soil form.
//!
//! This crate provides:
//! - `dom`: scans the server-rendered soil accordion via `web-sys`
//! - `fetch`: `CropApi` over the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals, acting as the controller's view
//! - `components`: RSX for the form, the description panel and each result panel

pub mod components;
pub mod dom;
pub mod fetch;
pub mod state;
