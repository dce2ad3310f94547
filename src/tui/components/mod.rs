pub mod progress;
pub mod slide;

pub use progress::render_progress_bank;
pub use slide::{SlideFrame, render_slide, truncate_to_width};
