//! Input validation for traffic-engineering operations
//!
//! Shared checks that turn out-of-domain inputs into [`TrafficError::InvalidArgument`]
//! before any arithmetic runs. NaN and infinite values are rejected here as
//! well: they would flow through the recurrences unnoticed and break the
//! bounded-probability invariant.

use crate::error::{Result, TrafficError};
use crate::types::{ChannelCount, Erlangs};

/// Validate an offered load: non-negative and finite.
pub fn validate_load(offered_load: Erlangs) -> Result<()> {
    validate_non_negative("offered load", offered_load)
}

/// Validate a channel count: at least 1.
pub fn validate_channels(channels: ChannelCount) -> Result<()> {
    if channels < 1 {
        return Err(TrafficError::invalid_argument(
            "channels must be at least 1, got 0",
        ));
    }
    Ok(())
}

/// Validate a named scalar parameter: non-negative and finite.
pub fn validate_non_negative(parameter: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrafficError::invalid_argument(format!(
            "{} must be non-negative and finite, got {}",
            parameter, value
        )));
    }
    Ok(())
}

/// Validate a blocking-probability goal: inside the open interval (0, 1).
pub fn validate_blocking_goal(goal: f64) -> Result<()> {
    if !goal.is_finite() || goal <= 0.0 || goal >= 1.0 {
        return Err(TrafficError::invalid_argument(format!(
            "blocking goal must lie strictly between 0 and 1, got {}",
            goal
        )));
    }
    Ok(())
}

/// Validate a service-level goal: a percentage inside the open interval (0, 100).
pub fn validate_service_level_goal(goal: f64) -> Result<()> {
    if !goal.is_finite() || goal <= 0.0 || goal >= 100.0 {
        return Err(TrafficError::invalid_argument(format!(
            "service-level goal must lie strictly between 0 and 100, got {}",
            goal
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_load() {
        assert!(validate_load(0.0).is_ok());
        assert!(validate_load(123.456).is_ok());

        assert!(validate_load(-0.01).is_err());
        assert!(validate_load(f64::NAN).is_err());
        assert!(validate_load(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_channels() {
        assert!(validate_channels(1).is_ok());
        assert!(validate_channels(10_000).is_ok());
        assert!(validate_channels(0).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("mean service time", 180.0).is_ok());
        assert!(validate_non_negative("mean service time", 0.0).is_ok());

        let err = validate_non_negative("mean service time", -1.0).unwrap_err();
        assert!(format!("{}", err).contains("mean service time"));
    }

    #[test]
    fn test_validate_blocking_goal() {
        assert!(validate_blocking_goal(0.01).is_ok());
        assert!(validate_blocking_goal(0.999).is_ok());

        assert!(validate_blocking_goal(0.0).is_err());
        assert!(validate_blocking_goal(1.0).is_err());
        assert!(validate_blocking_goal(-0.5).is_err());
        assert!(validate_blocking_goal(1.5).is_err());
        assert!(validate_blocking_goal(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_service_level_goal() {
        assert!(validate_service_level_goal(80.0).is_ok());
        assert!(validate_service_level_goal(99.9).is_ok());

        assert!(validate_service_level_goal(0.0).is_err());
        assert!(validate_service_level_goal(100.0).is_err());
        assert!(validate_service_level_goal(-20.0).is_err());
        assert!(validate_service_level_goal(f64::NAN).is_err());
    }
}
