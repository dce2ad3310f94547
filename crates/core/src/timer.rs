use std::time::{Duration, Instant};

/// Identity of one armed timer. A fresh id is handed out on every arm so that
/// callers can tell a restarted timer apart from the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A live timer: its identity and when it next fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: TimerId,
    pub deadline: Instant,
}

/// Self-rescheduling auto-advance timer.
///
/// At most one handle is alive at a time. Arming always invalidates the
/// previous handle, so a restarted timer can never fire alongside the one it
/// replaced.
#[derive(Debug, Clone)]
pub struct AutoAdvanceTimer {
    interval: Duration,
    next_id: u64,
    handle: Option<TimerHandle>,
}

impl AutoAdvanceTimer {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            handle: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel any live handle and arm a new one a full interval from `now`.
    pub fn arm(&mut self, now: Instant) -> TimerHandle {
        self.cancel();
        self.next_id += 1;
        let handle = TimerHandle {
            id: TimerId(self.next_id),
            deadline: now + self.interval,
        };
        self.handle = Some(handle);
        handle
    }

    /// Invalidate the live handle, if any.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.handle.take()
    }

    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Consume the live handle if its deadline has passed.
    ///
    /// The timer is left disarmed; the owner re-arms it after acting on the
    /// tick.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.handle {
            Some(handle) if now >= handle.deadline => self.handle.take(),
            _ => None,
        }
    }

    /// Time left before the live handle fires.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.handle
            .map(|handle| handle.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arming_replaces_previous_handle() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(Duration::from_secs(10));

        let first = timer.arm(start);
        let second = timer.arm(start + Duration::from_secs(3));

        assert_ne!(first.id, second.id);
        assert_eq!(timer.handle(), Some(second));
        assert_eq!(second.deadline, start + Duration::from_secs(13));
    }

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(Duration::from_secs(10));
        let handle = timer.arm(start);

        assert!(timer.fire_if_due(start + Duration::from_secs(9)).is_none());
        assert_eq!(
            timer.fire_if_due(start + Duration::from_secs(10)),
            Some(handle)
        );
        assert!(timer.fire_if_due(start + Duration::from_secs(20)).is_none());
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(Duration::from_secs(10));
        timer.arm(start);
        timer.cancel();

        assert!(timer.fire_if_due(start + Duration::from_secs(60)).is_none());
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let start = Instant::now();
        let mut timer = AutoAdvanceTimer::new(Duration::from_secs(10));
        timer.arm(start);

        assert_eq!(
            timer.remaining(start + Duration::from_secs(4)),
            Some(Duration::from_secs(6))
        );
        assert_eq!(
            timer.remaining(start + Duration::from_secs(15)),
            Some(Duration::ZERO)
        );
    }
}
