use std::time::{Duration, Instant};
use crate::admission::impls::admission_controller::EVICTION_THRESHOLD;
use crate::admission::structs::sweep_mark::SweepMark;

impl Default for SweepMark {
    fn default() -> Self {
        SweepMark {
            high_water: EVICTION_THRESHOLD,
            last_sweep: None,
        }
    }
}

impl SweepMark {
    /// A stripe is swept once it outgrows its high-water mark, or when a
    /// whole window has passed since the last sweep.
    pub fn is_due(&self, stripe_len: usize, now: Instant, window: Duration) -> bool {
        stripe_len > self.high_water
            || self.last_sweep.is_none_or(|at| now.saturating_duration_since(at) > window)
    }

    pub fn swept(&mut self, stripe_len: usize, now: Instant) {
        self.high_water = (stripe_len * 2).max(EVICTION_THRESHOLD);
        self.last_sweep = Some(now);
    }
}
