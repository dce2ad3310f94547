use std::time::{Duration, Instant};

use reel_core::{ItemView, NavigationDirection, PageHost, SlideContent};

/// How long an animated page transition takes on screen.
pub const PAGE_TRANSITION: Duration = Duration::from_millis(250);

/// What the host needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub index: usize,
    pub title: String,
    pub content: SlideContent,
}

impl PageSnapshot {
    fn capture(index: usize, view: &ItemView) -> Self {
        Self {
            index,
            title: view.title().to_string(),
            content: view.content().clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct PageTransition {
    outgoing: PageSnapshot,
    direction: NavigationDirection,
    /// Stamped on the first frame after the transition was requested.
    started: Option<Instant>,
}

/// A page transition in flight, as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct TransitionFrame<'a> {
    pub outgoing: &'a PageSnapshot,
    pub direction: NavigationDirection,
    /// Fraction of the incoming page that is on screen, in `[0.0, 1.0)`.
    pub progress: f64,
}

/// Page surface backed by the terminal.
#[derive(Debug, Clone)]
pub struct TerminalPageHost {
    front: Option<PageSnapshot>,
    transition: Option<PageTransition>,
}

impl Default for TerminalPageHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPageHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            front: None,
            transition: None,
        }
    }

    #[must_use]
    pub fn front(&self) -> Option<&PageSnapshot> {
        self.front.as_ref()
    }

    /// Move the transition clock forward, dropping transitions that finished.
    pub fn advance(&mut self, now: Instant) {
        let finished = match self.transition.as_mut() {
            Some(transition) => {
                let started = *transition.started.get_or_insert(now);
                now.duration_since(started) >= PAGE_TRANSITION
            }
            None => false,
        };
        if finished {
            self.transition = None;
        }
    }

    #[must_use]
    pub fn transition(&self, now: Instant) -> Option<TransitionFrame<'_>> {
        let transition = self.transition.as_ref()?;
        let progress = match transition.started {
            Some(started) => {
                now.duration_since(started).as_secs_f64() / PAGE_TRANSITION.as_secs_f64()
            }
            None => 0.0,
        };
        if progress >= 1.0 {
            return None;
        }
        Some(TransitionFrame {
            outgoing: &transition.outgoing,
            direction: transition.direction,
            progress,
        })
    }
}

impl PageHost for TerminalPageHost {
    fn initialize(&mut self, index: usize, view: &ItemView) {
        self.front = Some(PageSnapshot::capture(index, view));
        self.transition = None;
    }

    fn show(
        &mut self,
        index: usize,
        view: &ItemView,
        direction: NavigationDirection,
        animated: bool,
    ) {
        let incoming = PageSnapshot::capture(index, view);
        let outgoing = self.front.replace(incoming);
        // A newer transition replaces one still in flight.
        self.transition = match outgoing {
            Some(outgoing) if animated => Some(PageTransition {
                outgoing,
                direction,
                started: None,
            }),
            _ => None,
        };
    }

    fn front_most(&self) -> Option<usize> {
        self.front.as_ref().map(|page| page.index)
    }

    // The terminal has no paging gesture of its own to turn off.
    fn disable_builtin_gestures(&mut self) {}
}

#[cfg(test)]
mod tests {
    use reel_core::{ContentResolver, NullResolver};

    use super::*;

    fn view(name: &str) -> ItemView {
        ItemView::new(name, NullResolver.resolve(name))
    }

    #[test]
    fn initialize_installs_front_page_without_transition() {
        let mut host = TerminalPageHost::new();
        host.initialize(0, &view("butcher"));

        assert_eq!(host.front_most(), Some(0));
        assert_eq!(host.front().map(|page| page.title.as_str()), Some("butcher"));
        assert!(host.transition(Instant::now()).is_none());
    }

    #[test]
    fn animated_show_runs_a_transition_to_completion() {
        let start = Instant::now();
        let mut host = TerminalPageHost::new();
        host.initialize(0, &view("a"));
        host.show(1, &view("b"), NavigationDirection::Forward, true);

        host.advance(start);
        let frame = host.transition(start).expect("transition in flight");
        assert_eq!(frame.outgoing.index, 0);
        assert_eq!(frame.direction, NavigationDirection::Forward);
        assert_eq!(frame.progress, 0.0);

        let midway = start + PAGE_TRANSITION / 2;
        let frame = host.transition(midway).expect("still in flight");
        assert!((frame.progress - 0.5).abs() < 1e-9);

        host.advance(start + PAGE_TRANSITION);
        assert!(host.transition(start + PAGE_TRANSITION).is_none());
        assert_eq!(host.front_most(), Some(1));
    }

    #[test]
    fn unanimated_show_swaps_pages_immediately() {
        let mut host = TerminalPageHost::new();
        host.initialize(0, &view("a"));
        host.show(2, &view("c"), NavigationDirection::Backward, false);

        assert_eq!(host.front_most(), Some(2));
        assert!(host.transition(Instant::now()).is_none());
    }
}
