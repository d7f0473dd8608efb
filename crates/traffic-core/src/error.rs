//! Error handling for traffic-engineering computations
//!
//! This module defines the error type shared by every fallible operation in
//! the crate. Invalid inputs are always surfaced to the caller; they are
//! never silently clamped into the valid domain.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for traffic-engineering operations
pub type Result<T> = std::result::Result<T, TrafficError>;

/// Error type for traffic-engineering operations
///
/// The unstable-queue regime (offered load at or above the channel count) is
/// NOT an error: it is expected input and is reported through the defined
/// sentinel outputs (delay probability 1.0, infinite wait, service level 0).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrafficError {
    /// An input parameter is outside its documented domain
    #[error("Invalid argument: {details}")]
    InvalidArgument { details: String },

    /// A dimensioning search was stopped by the channel-count guard
    #[error("Computation limit exceeded: {operation} gave up after {limit} channels")]
    ComputationLimitExceeded { operation: &'static str, limit: u32 },
}

impl TrafficError {
    /// Create a new invalid argument error
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument {
            details: details.into(),
        }
    }

    /// Create a new computation limit error
    pub fn computation_limit_exceeded(operation: &'static str, limit: u32) -> Self {
        Self::ComputationLimitExceeded { operation, limit }
    }
}
