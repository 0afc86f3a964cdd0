use std::time::Duration;

/// Single-shot timer advanced by frame deltas.
///
/// Starting a running countdown replaces its deadline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, duration: Duration) {
        self.remaining = Some(duration);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Returns `true` on the tick that reaches the deadline, then stops.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(left) if dt >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}
