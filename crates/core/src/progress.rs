//! Per-slide progress indicators.
//!
//! Slots before the current slide read as complete, the current slot fills
//! linearly while the slide is on screen and later slots stay empty. Fills are
//! pure functions of time, so nothing has to wait on them: superseding a fill
//! just replaces the slot state.

use std::time::{Duration, Instant};

/// Delay before the active slot starts filling, so the fill does not race the
/// page transition.
pub const DEFAULT_FILL_DELAY: Duration = Duration::from_millis(100);

/// Display state of a single indicator slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotState {
    /// Empty, value 0.0.
    Idle,
    /// Full, value 1.0, set without animation.
    Complete,
    /// Linear fill from 0.0 to 1.0 starting at `starts_at`.
    Animating {
        generation: u64,
        starts_at: Instant,
        duration: Duration,
    },
}

impl SlotState {
    /// Value of the slot at `now`, in `[0.0, 1.0]`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f64 {
        match *self {
            Self::Idle => 0.0,
            Self::Complete => 1.0,
            Self::Animating {
                starts_at,
                duration,
                ..
            } => {
                if now <= starts_at {
                    return 0.0;
                }
                if duration.is_zero() {
                    return 1.0;
                }
                let elapsed = now.duration_since(starts_at).as_secs_f64();
                (elapsed / duration.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// Fixed bank of progress indicators, one per slide.
#[derive(Debug, Clone)]
pub struct ProgressTrack {
    slots: Vec<SlotState>,
    fill_duration: Duration,
    fill_delay: Duration,
    generation: u64,
}

impl ProgressTrack {
    #[must_use]
    pub fn new(fill_duration: Duration, fill_delay: Duration) -> Self {
        Self {
            slots: Vec::new(),
            fill_duration,
            fill_delay,
            generation: 0,
        }
    }

    /// Replace the bank with `n` empty slots.
    pub fn configure(&mut self, n: usize) {
        self.slots = vec![SlotState::Idle; n];
    }

    /// Mark `current` as the active slot.
    ///
    /// Every slot is rewritten, so a fill started by an earlier call is
    /// dropped and its slot snaps back to empty (or complete) immediately.
    /// Out-of-range indices leave the bank untouched.
    pub fn update(&mut self, current: usize, now: Instant) {
        if current >= self.slots.len() {
            return;
        }
        self.generation += 1;
        let starts_at = now + self.fill_delay;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = match index.cmp(&current) {
                std::cmp::Ordering::Less => SlotState::Complete,
                std::cmp::Ordering::Equal => SlotState::Animating {
                    generation: self.generation,
                    starts_at,
                    duration: self.fill_duration,
                },
                std::cmp::Ordering::Greater => SlotState::Idle,
            };
        }
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.slots.fill(SlotState::Idle);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).copied()
    }

    #[must_use]
    pub fn value(&self, index: usize, now: Instant) -> f64 {
        self.slots
            .get(index)
            .map_or(0.0, |slot| slot.value(now))
    }

    /// Snapshot of every slot value at `now`, in display order.
    #[must_use]
    pub fn values(&self, now: Instant) -> Vec<f64> {
        self.slots.iter().map(|slot| slot.value(now)).collect()
    }

    /// Index of the slot currently filling.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.slots.iter().position(SlotState::is_animating)
    }

    #[must_use]
    pub fn fill_duration(&self) -> Duration {
        self.fill_duration
    }

    #[must_use]
    pub fn fill_delay(&self) -> Duration {
        self.fill_delay
    }
}
