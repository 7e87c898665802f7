//! HTTP surface of the repository server.
//!
//! # Endpoints
//!
//! - `/api/v2.0/info?property=<p>` - a system property as `text/plain`
//! - `/api/v2.0/get?package=<name>[&path=<p>]` - package archive download, or
//!   a file inside the package when `path` is given
//! - `/api/v2.0/list[?package=<name>]` - package listing or per-architecture detail
//! - `/package/{name}[/{path}]` - same download/view split keyed by path segments;
//!   `/package/<file>.apg` also serves archives stored directly in the package root
//! - `/favicon.ico`, `/`, `/index.html`, `/icons/*`, `/static/*` - static files
//! - `/errors/404.html?errorCode=404` - error page
//!
//! Every route except the error page passes admission control first. Misses on
//! `/package/*` and `/api/v2.0/get` redirect to the error page. Downloads hold
//! a transfer throttle slot for their whole lifetime and are paced per chunk.

/// Data structures shared by the request handlers.
pub mod structs;

/// Implementation blocks for HTTP service components.
pub mod impls;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
