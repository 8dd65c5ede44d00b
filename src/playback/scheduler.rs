//! Tick scheduling for continuous playback
//!
//! The controller never sleeps. It hands a [`TickToken`] and a delay to a
//! [`Scheduler`] and later receives the token back through
//! [`Controller::pump`](super::controller::Controller::pump). A token carries
//! the controller's generation at scheduling time; the controller bumps the
//! generation on every pause, reset and restart, so a token that fires after
//! such a change no longer matches and is dropped.

use std::time::{Duration, Instant};

/// Identifies one scheduled continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    pub(crate) generation: u64,
}

/// A source of delayed ticks
pub trait Scheduler {
    /// Arrange for `token` to become due after `delay`
    fn schedule(&mut self, token: TickToken, delay: Duration);

    /// Remove and return every token whose deadline has passed, earliest first
    fn take_due(&mut self) -> Vec<TickToken>;

    /// Drop all pending tokens
    fn clear(&mut self);
}

/// Wall-clock scheduler used by the terminal UI
#[derive(Debug, Default)]
pub struct TimerScheduler {
    pending: Vec<(Instant, TickToken)>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, used to bound the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(at, _)| *at).min()
    }

    /// Time until the next deadline (zero if one is already due)
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

impl Scheduler for TimerScheduler {
    fn schedule(&mut self, token: TickToken, delay: Duration) {
        self.pending.push((Instant::now() + delay, token));
    }

    fn take_due(&mut self) -> Vec<TickToken> {
        take_due_at(&mut self.pending, Instant::now())
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Virtual-time scheduler: deadlines only pass when [`advance`](Self::advance)
/// is called. Used to drive playback deterministically in tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Vec<(Duration, TickToken)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Tokens not yet taken, in scheduling order
    pub fn pending_tokens(&self) -> Vec<TickToken> {
        self.pending.iter().map(|(_, token)| *token).collect()
    }

    /// Delay until the earliest pending deadline
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(at, _)| at.saturating_sub(self.now))
            .min()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TickToken, delay: Duration) {
        self.pending.push((self.now + delay, token));
    }

    fn take_due(&mut self) -> Vec<TickToken> {
        take_due_at(&mut self.pending, self.now)
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}

fn take_due_at<C: Ord + Copy>(pending: &mut Vec<(C, TickToken)>, now: C) -> Vec<TickToken> {
    let mut due: Vec<(C, TickToken)> = Vec::new();
    pending.retain(|&(at, token)| {
        if at <= now {
            due.push((at, token));
            false
        } else {
            true
        }
    });
    due.sort_by_key(|(at, _)| *at);
    due.into_iter().map(|(_, token)| token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(generation: u64) -> TickToken {
        TickToken { generation }
    }

    #[test]
    fn test_manual_deadlines() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(1), Duration::from_millis(300));
        scheduler.schedule(token(2), Duration::from_millis(100));

        assert!(scheduler.take_due().is_empty());
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(scheduler.take_due(), vec![token(2)]);
        scheduler.advance(Duration::from_millis(500));
        assert_eq!(scheduler.take_due(), vec![token(1)]);
        assert!(scheduler.pending_tokens().is_empty());
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(3), Duration::ZERO);
        assert_eq!(scheduler.take_due(), vec![token(3)]);
    }

    #[test]
    fn test_due_tokens_ordered_by_deadline() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(token(1), Duration::from_millis(50));
        scheduler.schedule(token(2), Duration::from_millis(10));
        scheduler.advance(Duration::from_millis(60));
        assert_eq!(scheduler.take_due(), vec![token(2), token(1)]);
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule(token(1), Duration::from_secs(60));
        assert!(scheduler.next_deadline().is_some());
        scheduler.clear();
        assert!(scheduler.next_deadline().is_none());
        assert!(scheduler.take_due().is_empty());
    }

    #[test]
    fn test_timer_zero_delay() {
        let mut scheduler = TimerScheduler::new();
        scheduler.schedule(token(5), Duration::ZERO);
        assert_eq!(scheduler.take_due(), vec![token(5)]);
    }
}
