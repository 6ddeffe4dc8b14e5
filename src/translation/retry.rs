/*!
 * Bounded retry with exponential backoff.
 *
 * Each segment walks through a small state machine: `Attempting(n)` until a
 * request succeeds (`Succeeded`) or the attempt budget runs out (`Exhausted`).
 * The attempt budget is per segment. The backoff delay is per call: it keeps
 * doubling across segments and is never reset by a success.
 */

use std::time::Duration;

/// Retry budget and backoff schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per segment, the first one included
    pub max_attempts: u32,
    /// Wait after the first failed attempt of a call
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts,
            initial_backoff,
        }
    }

    /// Fresh backoff sequence for one translation call
    pub fn backoff(&self) -> Backoff {
        Backoff::new(self.initial_backoff)
    }
}

/// Doubling delay shared by every segment of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backoff {
    next: Duration,
}

impl Backoff {
    pub fn new(initial: Duration) -> Self {
        Self { next: initial }
    }

    /// Delay the next wait will use
    pub fn peek(&self) -> Duration {
        self.next
    }

    /// Take the current delay and double it for the following wait
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.next;
        self.next = self.next.saturating_mul(2);
        delay
    }
}

/// Per-segment retry state
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentState {
    /// About to issue attempt `n` (1-based)
    Attempting(u32),
    /// A request returned this text
    Succeeded(String),
    /// Every attempt failed
    Exhausted,
}

impl SegmentState {
    /// Advance after a failed attempt
    ///
    /// Returns the next state and the delay to wait before it. The last
    /// attempt exhausts the segment without waiting and leaves `backoff`
    /// untouched.
    pub fn after_failure(&self, policy: &RetryPolicy, backoff: &mut Backoff) -> (SegmentState, Option<Duration>) {
        match self {
            SegmentState::Attempting(n) if *n < policy.max_attempts => {
                (SegmentState::Attempting(n + 1), Some(backoff.next_delay()))
            }
            SegmentState::Attempting(_) => (SegmentState::Exhausted, None),
            other => (other.clone(), None),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SegmentState::Attempting(_))
    }
}
