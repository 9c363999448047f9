// player/src/timer.rs
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

/// A simple turn timer. Can be running or paused, and tracks total time
/// spent in both states. The referee may suspend the process while it
/// waits for input, so the paused total is an upper bound on the
/// opponent's thinking time.
pub struct Timer {
    running: bool,
    start: Instant,
    elapsed: [Duration; 2],
}

impl Timer {
    pub fn new(running: bool) -> Self {
        Self {
            running,
            start: Instant::now(),
            elapsed: [Duration::ZERO; 2],
        }
    }

    /// Total time spent in the given state.
    pub fn elapsed(&self, while_running: bool) -> Duration {
        let mut d = self.elapsed[while_running as usize];
        if self.running == while_running {
            d += self.start.elapsed();
        }
        d
    }

    pub fn elapsed_running(&self) -> Duration {
        self.elapsed(true)
    }

    pub fn elapsed_paused(&self) -> Duration {
        self.elapsed(false)
    }

    pub fn pause(&mut self) -> Duration {
        debug_assert!(self.running);
        self.toggle()
    }

    pub fn resume(&mut self) -> Duration {
        debug_assert!(!self.running);
        self.toggle()
    }

    /// Toggles the state and returns how much time passed since the last
    /// toggle.
    fn toggle(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now - self.start;
        self.elapsed[self.running as usize] += delta;
        self.start = now;
        self.running = !self.running;
        delta
    }
}
