use std::time::Duration;

use super::Sleeper;

/// Fixed-delay scheduler: run a cycle, wait `interval`, repeat.
pub struct Scheduler<S> {
    interval: Duration,
    sleeper: S,
}

impl<S: Sleeper> Scheduler<S> {
    pub fn new(interval: Duration, sleeper: S) -> Self {
        Self { interval, sleeper }
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Run `cycle` repeatedly. `cycle` receives the 1-based cycle number.
    ///
    /// With `max_cycles = None` this never returns. With `Some(n)` it stops after
    /// the n-th cycle without a trailing wait and returns the number of cycles run.
    pub fn run<F>(&self, max_cycles: Option<u64>, mut cycle: F) -> u64
    where
        F: FnMut(u64, &S),
    {
        let mut n = 0u64;
        loop {
            n += 1;
            tracing::debug!(cycle = n, "cycle starting");
            cycle(n, &self.sleeper);
            if max_cycles.is_some_and(|max| n >= max) {
                return n;
            }
            tracing::debug!(cycle = n, wait_secs = self.interval.as_secs(), "waiting for next cycle");
            self.sleeper.sleep(self.interval);
        }
    }
}
