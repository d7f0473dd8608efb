//! Offered-load conversion
//!
//! Turns raw arrival-rate and call-duration figures into a traffic intensity
//! in Erlangs, the input every other component of this crate consumes.

use crate::error::Result;
use crate::types::Erlangs;
use crate::validation::validate_non_negative;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Rounding scale applied to hourly offered-load figures: 4 decimal digits,
/// for presentation stability of reported Erlang values.
const LOAD_ROUND_SCALE: f64 = 10_000.0;

/// Offered load from an hourly call profile.
///
/// Combines the mean hold time and the mean talk time (both in seconds) into
/// a per-call service time, scales it against the hourly arrival rate, and
/// rounds the resulting intensity to 4 decimal digits.
///
/// ```
/// use teletraf_traffic_core::offered_load_hourly;
///
/// let erlangs = offered_load_hourly(100.0, 0.0, 180.0)?;
/// assert!((erlangs - 0.0833).abs() < 1e-4);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `arrival_rate_per_hour` - Calls offered per hour
/// * `mean_hold_time` - Average hold time per call, in seconds
/// * `average_call_time` - Average talk time per call, in seconds
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if any
/// input is negative or non-finite.
pub fn offered_load_hourly(
    arrival_rate_per_hour: f64,
    mean_hold_time: f64,
    average_call_time: f64,
) -> Result<Erlangs> {
    validate_non_negative("arrival rate", arrival_rate_per_hour)?;
    validate_non_negative("mean hold time", mean_hold_time)?;
    validate_non_negative("average call time", average_call_time)?;

    let total_call_time = (mean_hold_time + average_call_time) / SECONDS_PER_MINUTE;
    let erlangs = (arrival_rate_per_hour * total_call_time) / SECONDS_PER_HOUR;

    Ok((erlangs * LOAD_ROUND_SCALE).round() / LOAD_ROUND_SCALE)
}

/// Offered load from a per-second arrival rate.
///
/// The plain product of arrival rate and mean call duration; no rounding is
/// applied.
///
/// # Arguments
///
/// * `arrival_rate_per_second` - Calls offered per second
/// * `mean_call_duration` - Mean call duration, in seconds
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if either
/// input is negative or non-finite.
pub fn offered_load(arrival_rate_per_second: f64, mean_call_duration: f64) -> Result<Erlangs> {
    validate_non_negative("arrival rate", arrival_rate_per_second)?;
    validate_non_negative("mean call duration", mean_call_duration)?;

    Ok(arrival_rate_per_second * mean_call_duration)
}
