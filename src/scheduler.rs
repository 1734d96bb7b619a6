use std::time::{Duration, Instant};

/// Repeating tick timer, polled from the main loop.
///
/// Disarmed once a game ends so no further ticks fire, and rearmed on reset.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
    armed: bool,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Ticker {
            interval,
            last: now,
            armed: true,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether a tick should fire at `now`. Starts the next period when it does.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.armed && now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        if !self.armed {
            return self.interval;
        }
        self.interval.saturating_sub(now.duration_since(self.last))
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn rearm(&mut self, now: Instant) {
        self.armed = true;
        self.last = now;
    }
}
