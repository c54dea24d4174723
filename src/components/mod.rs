//! UI Components
//!
//! Leptos page shell around the imperative list views.

mod list_panel;

pub use list_panel::ListPanel;
