use std::sync::mpsc::Sender;

use reel_core::{Presentation, Presenter};

/// Requests the carousel makes of the screen that presented it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterSignal {
    Presented(Presentation),
    Dismissed,
}

/// Presenter that forwards requests to the [`App`](super::App) owning the
/// screen stack. The app applies them on its next frame.
#[derive(Debug, Clone)]
pub struct ScreenPresenter {
    tx: Sender<PresenterSignal>,
}

impl ScreenPresenter {
    #[must_use]
    pub fn new(tx: Sender<PresenterSignal>) -> Self {
        Self { tx }
    }
}

impl Presenter for ScreenPresenter {
    fn present(&mut self, presentation: Presentation) {
        if self.tx.send(PresenterSignal::Presented(presentation)).is_err() {
            tracing::warn!("screen stack is gone; cannot present carousel");
        }
    }

    fn dismiss(&mut self) {
        if self.tx.send(PresenterSignal::Dismissed).is_err() {
            tracing::warn!("screen stack is gone; cannot dismiss carousel");
        }
    }
}
