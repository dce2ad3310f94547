use crate::item::ItemView;

/// Direction of a page transition, derived from the current and target index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    Forward,
    Backward,
}

impl NavigationDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Surface that performs the animated transition between two slide views.
///
/// Programmatic transitions are fire-and-forget. Hosts that support their own
/// user-driven paging report the resolved page back through
/// [`Carousel::swipe_completed`](crate::Carousel::swipe_completed).
pub trait PageHost {
    /// Install the first page without a transition.
    fn initialize(&mut self, index: usize, view: &ItemView);

    /// Transition to the page at `index`.
    fn show(
        &mut self,
        index: usize,
        view: &ItemView,
        direction: NavigationDirection,
        animated: bool,
    );

    /// Index of the page currently in front, if any page has been installed.
    fn front_most(&self) -> Option<usize>;

    /// Turn off the host's own paging gestures so the carousel's tap zones
    /// stay authoritative.
    fn disable_builtin_gestures(&mut self);
}
