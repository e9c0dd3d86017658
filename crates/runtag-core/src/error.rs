//! Core domain errors.

use thiserror::Error;

/// Core domain errors for RunTag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A status string that names none of the known run statuses.
    #[error("Unknown run status: '{0}'")]
    UnknownStatus(String),
}
