//! RunTag Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Terminal rendering
//! - Runtime specifics
//!
//! The central piece is [`present`], the exhaustive mapping from a
//! [`RunStatus`] to the [`PresentationDescriptor`] a rendering layer paints.

pub mod error;
pub mod ids;
pub mod presenter;
pub mod stats;
pub mod status;

// Re-export commonly used types
pub use error::CoreError;
pub use ids::RunId;
pub use presenter::{present, Intent, PresentationDescriptor};
pub use stats::{RunStats, RunSummary};
pub use status::RunStatus;
