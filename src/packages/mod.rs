//! Package registry resolution.
//!
//! The package root holds one directory per package build. A build directory
//! may carry a `metadata.json` (`{name, version, release, architecture}`) and a
//! `download/<name>.apg` archive:
//!
//! ```text
//! package/
//!   nano-x86_64/
//!     metadata.json
//!     download/nano-x86_64.apg
//!   nano-aarch64/
//!     metadata.json
//! ```
//!
//! Nothing is cached: every listing and detail query scans the tree again, so
//! answers always match what is on disk. Should request volume ever demand it,
//! a periodically refreshed in-memory copy of the detail map can sit in front
//! of [`PackageIndex`](structs::package_index::PackageIndex) without changing
//! its interface.

/// File kinds, version ranks and package errors.
pub mod enums;

/// Index, metadata and response structures.
pub mod structs;

/// Filesystem seam used by the index.
pub mod traits;

/// Implementation blocks for the package index.
pub mod impls;
