//! Client library for the run tracker.
//!
//! Provides the [`StatsLookup`] seam used by hover overlays and an HTTP
//! implementation that talks to the run tracker's REST API.

pub mod error;
pub mod http;
pub mod lookup;

pub use error::ClientError;
pub use http::HttpClient;
pub use lookup::StatsLookup;
