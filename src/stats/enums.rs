/// Counter selector.
pub mod stats_event;
