/// Transition used when the carousel is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    CoverVertical,
    CrossDissolve,
}

/// How the host application should present the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub full_screen: bool,
    pub transition: Transition,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            full_screen: true,
            transition: Transition::CoverVertical,
        }
    }
}

/// The host application's presentation mechanism.
pub trait Presenter {
    fn present(&mut self, presentation: Presentation);

    /// Hand control back to whatever presented the carousel. Called at most
    /// once per session.
    fn dismiss(&mut self);
}
