//! Runtime statistics.
//!
//! Lock-free counters updated from request handlers and read by the periodic
//! `[STATS]` report and the `stats` console command.
//!
//! ```rust,ignore
//! use tulpar_server::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::DownloadsStarted, 1);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
