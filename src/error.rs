//! Error shape carried by failed remote workflows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error id the API reports when SSN verification fails during a SoFi
/// migration. The verify scene re-shows the form for this id instead of
/// the generic error screen.
pub const SSN_ERROR: &str = "SSN_ERROR";

/// Error payload returned by the wallet API.
///
/// The state layer transports these into `Failure` branches without
/// interpreting them; what the user sees is the renderer's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{id}: {message}")]
pub struct ApiError {
    pub id: String,
    pub message: String,
}

impl ApiError {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Check for the SSN verification error id.
    pub fn is_ssn_error(&self) -> bool {
        self.id == SSN_ERROR
    }
}
