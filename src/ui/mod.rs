//! Interactive terminal front-end for `reel`.
//!
//! [`App`] owns the landing screen and, while a session runs, the
//! [`reel_core::Carousel`] driving it. The terminal plays the page host
//! ([`host`]) and the screen stack plays the presenter ([`presenter`]); the
//! remaining submodules implement input handling, rendering and the event
//! loop.

mod actions;
mod config;
pub mod gesture;
pub mod host;
mod outcome;
pub mod presenter;
mod render;
mod runtime;
mod state;

pub use config::{SHOWCASE_SLIDES, ShowcaseConfig, SlideSpec, SlideSpecError};
pub use outcome::{SessionSummary, ShowcaseReport};
pub use runtime::run;
pub use state::{App, Screen};
