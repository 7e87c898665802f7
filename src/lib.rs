//! # Tulpar Server
//!
//! A package repository distribution server built on Actix-web.
//!
//! ## Overview
//!
//! The server publishes `.apg` package archives and their metadata from a
//! directory tree, one directory per package build with a `metadata.json`
//! describing name, version, release and architecture. Clients browse the
//! repository through a small JSON API and download archives over HTTP or
//! HTTPS.
//!
//! ## Features
//!
//! - **Admission control**: sliding-window rate limiting per client with
//!   automatic temporary blocks and operator bans
//! - **Throttled downloads**: per-client concurrent download cap and
//!   bandwidth pacing
//! - **Live package index**: listings and per-architecture "latest" versions
//!   derived from disk on every request
//! - **Control plane**: start, stop, restart and TLS activation driven by
//!   operator console commands
//! - **Monitoring**: periodic statistics, request log and Sentry integration
//!
//! ## Modules
//!
//! - [`admission`] - rate limiting and block list
//! - [`common`] - logging setup, shared helpers and sharded client maps
//! - [`config`] - TOML configuration
//! - [`control`] - server lifecycle and administrative commands
//! - [`http`] - request handlers and listener construction
//! - [`packages`] - package index over the filesystem
//! - [`ssl`] - keystore loading and self-signed generation
//! - [`stats`] - runtime counters
//! - [`structs`] - CLI arguments
//! - [`throttle`] - download concurrency and pacing

/// Sliding-window rate limiting and the client block list.
///
/// Requests from different clients never contend on the same lock; client
/// state is sharded by identity.
pub mod admission;

/// Common utilities and shared functionality.
///
/// Logging setup, error type, system properties, content types and the
/// sharded client map used by admission and throttling.
pub mod common;

/// Configuration management module.
///
/// Loads and validates `config.toml`, creating a default one on request.
pub mod config;

/// Server lifecycle control plane.
///
/// Supervises the listener state machine and runs operator commands one at
/// a time.
pub mod control;

/// HTTP request surface.
///
/// Package API, package downloads and views, static files and the error
/// page, all behind admission control.
pub mod http;

/// Package index.
///
/// Scans the package root on every call; nothing is cached.
pub mod packages;

/// SSL/TLS keystore handling.
pub mod ssl;

/// Statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Per-client download concurrency cap and bandwidth pacing.
pub mod throttle;
