use std::time::Instant;

/// When a crowded stripe was last swept for idle clients, and how large it
/// may grow before the next sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepMark {
    pub high_water: usize,
    pub last_sweep: Option<Instant>,
}
