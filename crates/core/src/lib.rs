//! Story carousel state machine.
//!
//! [`Carousel`] owns the slide sequence, the auto-advance timer and the bank of
//! progress indicators. Rendering a slide, presenting the carousel and running
//! page transitions are left to the [`PageHost`] and [`Presenter`]
//! collaborators injected at construction.

pub mod controller;
pub mod error;
pub mod host;
pub mod item;
pub mod presenter;
pub mod progress;
pub mod timer;

pub use controller::{
    Carousel, CarouselEvent, CarouselOptions, DEFAULT_INTERVAL, DismissReason, IgnoreReason,
    MAX_FILL_DELAY, MAX_INTERVAL, Outcome, SessionPhase,
};
pub use error::CarouselError;
pub use host::{NavigationDirection, PageHost};
pub use item::{
    AssetDirResolver, CarouselItem, ContentResolver, ImageItem, IntentSender, ItemView,
    NavCallback, NullResolver, SlideContent, SlideIntent, TapZone,
};
pub use presenter::{Presentation, Presenter, Transition};
pub use progress::{DEFAULT_FILL_DELAY, ProgressTrack, SlotState};
pub use timer::{AutoAdvanceTimer, TimerHandle, TimerId};
