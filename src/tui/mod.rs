//! Terminal UI building blocks for rendering `reel`.
//!
//! The submodules here expose the widgets and themes used by the higher level
//! UI orchestration code in [`crate::ui`].

pub mod components;
pub mod theme;
