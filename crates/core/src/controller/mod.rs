//! The carousel state machine.
//!
//! A [`Carousel`] has a single steady state, "showing slide `current`", and
//! moves between slides in response to [`CarouselEvent`]s. Page transitions
//! themselves are delegated to the [`PageHost`]; from the controller's point
//! of view every transition is instantaneous.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::error::CarouselError;
use crate::host::{NavigationDirection, PageHost};
use crate::item::{CarouselItem, IntentSender, ItemView, SlideIntent, TapZone};
use crate::presenter::{Presentation, Presenter};
use crate::progress::{DEFAULT_FILL_DELAY, ProgressTrack};
use crate::timer::{AutoAdvanceTimer, TimerHandle};


/// Time a slide stays on screen before the carousel advances on its own.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// Longest accepted auto-advance interval. Deadlines are `Instant + interval`,
/// so the bound keeps that addition from overflowing.
pub const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Longest accepted pause before the active indicator starts filling.
pub const MAX_FILL_DELAY: Duration = Duration::from_secs(60);

/// Per-session tuning. Fixed once the carousel is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Auto-advance interval, also the fill duration of the active indicator.
    pub interval: Duration,
    pub fill_delay: Duration,
    /// Whether programmatic page transitions are animated.
    pub animated: bool,
    pub presentation: Presentation,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            fill_delay: DEFAULT_FILL_DELAY,
            animated: true,
            presentation: Presentation::default(),
        }
    }
}

/// Inputs the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The auto-advance timer fired.
    TimerTick,
    /// The left half of the screen was tapped.
    TapLeft,
    /// The right half of the screen was tapped.
    TapRight,
    /// The host finished a user-driven page swipe and now shows this index.
    SwipeCompleted(usize),
    /// The user swiped down to close the carousel.
    SwipeDown,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Auto-advance ran past the last slide.
    Completed,
    SwipedDown,
}

impl DismissReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::SwipedDown => "swiped-down",
        }
    }
}

/// Lifecycle of one carousel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed but not yet on screen.
    Pending,
    Active,
    Dismissed(DismissReason),
}

/// Why an event left the carousel untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotVisible,
    Dismissed,
    /// A swipe completion for a page that is no longer in front.
    StaleCompletion,
    OutOfRange,
    Unchanged,
}

/// Result of feeding one event to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved {
        from: usize,
        to: usize,
        direction: NavigationDirection,
    },
    Dismissed(DismissReason),
    Ignored(IgnoreReason),
}

/// Auto-advancing, one-pass story carousel.
pub struct Carousel<H, P> {
    items: Vec<Box<dyn CarouselItem>>,
    current: usize,
    phase: SessionPhase,
    timer: AutoAdvanceTimer,
    progress: ProgressTrack,
    host: H,
    presenter: P,
    intents: IntentSender,
    intent_rx: Receiver<SlideIntent>,
    animated: bool,
    presentation: Presentation,
}

impl<H: PageHost, P: Presenter> Carousel<H, P> {
    /// Build a carousel over a fixed, non-empty list of slides.
    pub fn new(
        items: Vec<Box<dyn CarouselItem>>,
        host: H,
        presenter: P,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::NoItems);
        }
        if options.interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }
        if options.interval > MAX_INTERVAL {
            return Err(CarouselError::IntervalTooLarge { max: MAX_INTERVAL });
        }
        if options.fill_delay > MAX_FILL_DELAY {
            return Err(CarouselError::FillDelayTooLarge {
                max: MAX_FILL_DELAY,
            });
        }

        let mut progress = ProgressTrack::new(options.interval, options.fill_delay);
        progress.configure(items.len());
        let (intents, intent_rx) = IntentSender::channel();

        Ok(Self {
            items,
            current: 0,
            phase: SessionPhase::Pending,
            timer: AutoAdvanceTimer::new(options.interval),
            progress,
            host,
            presenter,
            intents,
            intent_rx,
            animated: options.animated,
            presentation: options.presentation,
        })
    }

    /// Ask the presenter to put the carousel on screen, then start it.
    pub fn present(&mut self, now: Instant) {
        if self.phase != SessionPhase::Pending {
            return;
        }
        self.presenter.present(self.presentation);
        self.on_visible(now);
    }

    /// Start the session: install the first page, take over paging from the
    /// host and arm the auto-advance timer.
    pub fn on_visible(&mut self, now: Instant) {
        if self.phase != SessionPhase::Pending {
            return;
        }
        self.phase = SessionPhase::Active;

        let view = self.items[self.current].view(&self.intents);
        self.host.initialize(self.current, view);
        self.host.disable_builtin_gestures();
        let handle = self.timer.arm(now);
        self.progress.update(self.current, now);

        info!(
            slides = self.items.len(),
            interval_ms = self.timer.interval().as_millis() as u64,
            timer = handle.id.get(),
            "carousel session started"
        );
    }

    /// Feed one event to the state machine.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> Outcome {
        match self.phase {
            SessionPhase::Dismissed(_) => {
                trace!(?event, "carousel already dismissed; ignoring event");
                return Outcome::Ignored(IgnoreReason::Dismissed);
            }
            SessionPhase::Pending if event != CarouselEvent::SwipeDown => {
                trace!(?event, "carousel not visible yet; ignoring event");
                return Outcome::Ignored(IgnoreReason::NotVisible);
            }
            _ => {}
        }

        match event {
            CarouselEvent::TimerTick => self.advance_from_timer(now),
            CarouselEvent::TapLeft => {
                self.navigate(self.previous_index(), NavigationDirection::Backward, now)
            }
            CarouselEvent::TapRight => {
                self.navigate(self.next_index(), NavigationDirection::Forward, now)
            }
            CarouselEvent::SwipeCompleted(index) => self.complete_swipe(index, now),
            CarouselEvent::SwipeDown => self.dismiss(DismissReason::SwipedDown),
        }
    }

    /// Process queued slide intents, then fire the timer if it is due.
    ///
    /// Returns the outcome of the timer firing, if it fired.
    pub fn tick(&mut self, now: Instant) -> Option<Outcome> {
        self.drain_intents(now);
        self.timer.fire_if_due(now)?;
        Some(self.handle(CarouselEvent::TimerTick, now))
    }

    /// Apply every intent queued by slide callbacks. Returns the outcome of
    /// the last one.
    pub fn drain_intents(&mut self, now: Instant) -> Option<Outcome> {
        let mut last = None;
        while let Ok(intent) = self.intent_rx.try_recv() {
            let event = match intent {
                SlideIntent::Next => CarouselEvent::TapRight,
                SlideIntent::Previous => CarouselEvent::TapLeft,
            };
            last = Some(self.handle(event, now));
        }
        last
    }

    /// Route a tap at horizontal position `x` through the current slide's
    /// tap zones.
    ///
    /// Slides without navigation callbacks fall back to the zone's default
    /// event so a tap is never lost.
    pub fn tap_at(&mut self, x: f64, width: f64, now: Instant) -> Outcome {
        match self.phase {
            SessionPhase::Pending => return Outcome::Ignored(IgnoreReason::NotVisible),
            SessionPhase::Dismissed(_) => return Outcome::Ignored(IgnoreReason::Dismissed),
            SessionPhase::Active => {}
        }
        let zone = ItemView::zone_at(x, width);
        let activated = self.items[self.current].view(&self.intents).activate(zone);
        let queued = if activated {
            self.drain_intents(now)
        } else {
            None
        };
        queued.unwrap_or_else(|| {
            let event = match zone {
                TapZone::Left => CarouselEvent::TapLeft,
                TapZone::Right => CarouselEvent::TapRight,
            };
            self.handle(event, now)
        })
    }

    pub fn tap_left(&mut self, now: Instant) -> Outcome {
        self.handle(CarouselEvent::TapLeft, now)
    }

    pub fn tap_right(&mut self, now: Instant) -> Outcome {
        self.handle(CarouselEvent::TapRight, now)
    }

    pub fn swipe_completed(&mut self, index: usize, now: Instant) -> Outcome {
        self.handle(CarouselEvent::SwipeCompleted(index), now)
    }

    pub fn swipe_down(&mut self, now: Instant) -> Outcome {
        self.handle(CarouselEvent::SwipeDown, now)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty item lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        matches!(self.phase, SessionPhase::Dismissed(_))
    }

    #[must_use]
    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        match self.phase {
            SessionPhase::Dismissed(reason) => Some(reason),
            _ => None,
        }
    }

    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    /// When the auto-advance timer next fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.handle().map(|handle| handle.deadline)
    }

    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.timer.interval()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTrack {
        &self.progress
    }

    #[must_use]
    pub fn items(&self) -> &[Box<dyn CarouselItem>] {
        &self.items
    }

    #[must_use]
    pub fn current_title(&self) -> &str {
        self.items[self.current].title()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn next_index(&self) -> usize {
        (self.current + 1) % self.items.len()
    }

    fn previous_index(&self) -> usize {
        let len = self.items.len();
        (self.current + len - 1) % len
    }

    fn advance_from_timer(&mut self, now: Instant) -> Outcome {
        // A single slide wraps straight back to itself.
        if self.items.len() == 1 {
            return self.dismiss(DismissReason::Completed);
        }
        let target = self.next_index();
        if target == 0 {
            return self.dismiss(DismissReason::Completed);
        }
        self.navigate(target, NavigationDirection::Forward, now)
    }

    fn navigate(&mut self, target: usize, direction: NavigationDirection, now: Instant) -> Outcome {
        let from = self.current;
        let view = self.items[target].view(&self.intents);
        self.host.show(target, view, direction, self.animated);
        self.set_current(target, now);
        let handle = self.timer.arm(now);

        debug!(
            from,
            to = target,
            direction = direction.as_str(),
            timer = handle.id.get(),
            "carousel moved"
        );
        Outcome::Moved {
            from,
            to: target,
            direction,
        }
    }

    fn complete_swipe(&mut self, index: usize, now: Instant) -> Outcome {
        if index >= self.items.len() {
            trace!(index, "swipe completion out of range");
            return Outcome::Ignored(IgnoreReason::OutOfRange);
        }
        if self.host.front_most() != Some(index) {
            trace!(index, front = ?self.host.front_most(), "dropping stale swipe completion");
            return Outcome::Ignored(IgnoreReason::StaleCompletion);
        }
        if index == self.current {
            return Outcome::Ignored(IgnoreReason::Unchanged);
        }

        let from = self.current;
        let direction = if index > from {
            NavigationDirection::Forward
        } else {
            NavigationDirection::Backward
        };
        self.items[index].view(&self.intents);
        self.set_current(index, now);
        // User-driven index changes always restart the countdown.
        let handle = self.timer.arm(now);

        debug!(from, to = index, timer = handle.id.get(), "swipe completed");
        Outcome::Moved {
            from,
            to: index,
            direction,
        }
    }

    fn set_current(&mut self, index: usize, now: Instant) {
        self.current = index;
        self.progress.update(index, now);
    }

    fn dismiss(&mut self, reason: DismissReason) -> Outcome {
        if self.is_dismissed() {
            return Outcome::Ignored(IgnoreReason::Dismissed);
        }
        self.phase = SessionPhase::Dismissed(reason);
        self.timer.cancel();
        self.progress.reset();
        for item in &mut self.items {
            item.release_view();
        }
        self.presenter.dismiss();

        info!(
            reason = reason.as_str(),
            index = self.current,
            "carousel session ended"
        );
        Outcome::Dismissed(reason)
    }
}
