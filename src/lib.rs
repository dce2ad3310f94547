//! Terminal story showcase built on [`reel_core`].
//!
//! The root module re-exports the pieces embedders need to configure and run
//! the showcase without digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod tui;
pub mod ui;

pub use crate::tui::theme::{Theme, default_theme};
pub use ui::{App, SessionSummary, ShowcaseConfig, ShowcaseReport, SlideSpec, run};
