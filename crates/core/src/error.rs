use std::time::Duration;

use thiserror::Error;

/// Errors raised while constructing a [`Carousel`](crate::Carousel).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one slide to have a valid current index.
    #[error("a carousel requires at least one item")]
    NoItems,

    /// The auto-advance interval must be strictly positive.
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,

    #[error("auto-advance interval must not exceed {max:?}")]
    IntervalTooLarge { max: Duration },

    #[error("progress fill delay must not exceed {max:?}")]
    FillDelayTooLarge { max: Duration },
}
