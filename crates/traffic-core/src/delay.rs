//! Erlang C delay probability and the queueing metrics derived from it
//!
//! Models a waiting system: calls that find every channel busy queue instead
//! of being dropped. [`erlang_c`] gives the probability that an arriving
//! call waits at all, and [`average_wait_time`] and [`service_level`] apply
//! the standard M/M/c waiting-time results on top of it.
//!
//! Erlang C is computed from Erlang B through the identity
//!
//! ```text
//! C = c·B / (c - A·(1 - B))
//! ```
//!
//! so it inherits the numerical range of the blocking recurrence instead of
//! re-summing the Poisson series. When the offered load reaches or exceeds
//! the channel count the queue has no steady state; the functions here
//! report that as certain delay, unbounded wait, and zero service level
//! rather than as an error.

use tracing::debug;

use crate::blocking::erlang_b;
use crate::error::Result;
use crate::types::{ChannelCount, Erlangs};
use crate::validation::{validate_channels, validate_load, validate_non_negative};

/// Erlang C probability that an arriving call has to wait.
///
/// ```
/// use teletraf_traffic_core::erlang_c;
///
/// // 10 Erlangs offered to 15 agents: about 10.2% of calls queue
/// let delay = erlang_c(10.0, 15)?;
/// assert!((delay - 0.1020).abs() < 1e-3);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `channels` - Number of serving channels
///
/// # Returns
///
/// The delay probability, in [0, 1]. When the load reaches or exceeds the
/// channel count the system is saturated and the result is exactly 1.0.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if the
/// load is negative or non-finite, or if `channels` is 0.
pub fn erlang_c(offered_load: Erlangs, channels: ChannelCount) -> Result<f64> {
    validate_load(offered_load)?;
    validate_channels(channels)?;

    if offered_load >= channels as f64 {
        debug!(
            offered_load,
            channels, "load at or above capacity, delay probability is 1"
        );
        return Ok(1.0);
    }

    let blocking = erlang_b(offered_load, channels)?;
    Ok(delay_from_blocking(blocking, offered_load, channels))
}

/// Erlang C from an already-computed Erlang B value.
///
/// Requires `offered_load < channels`; the denominator is then strictly
/// positive and the result lies in [B, 1].
pub(crate) fn delay_from_blocking(
    blocking: f64,
    offered_load: Erlangs,
    channels: ChannelCount,
) -> f64 {
    let c = channels as f64;
    (c * blocking) / (c - offered_load * (1.0 - blocking))
}

/// Mean wait over all calls, in the unit of `mean_service_time`.
///
/// Requires `offered_load < channels`.
pub(crate) fn wait_from_delay(
    delay: f64,
    offered_load: Erlangs,
    channels: ChannelCount,
    mean_service_time: f64,
) -> f64 {
    (delay / (channels as f64 - offered_load)) * mean_service_time
}

/// Percentage of calls answered within `target_answer_time`, where the
/// target is expressed in multiples of the mean service time.
///
/// Requires `offered_load < channels`.
pub(crate) fn service_level_from_delay(
    delay: f64,
    offered_load: Erlangs,
    channels: ChannelCount,
    target_answer_time: f64,
) -> f64 {
    let spare_capacity = channels as f64 - offered_load;
    (1.0 - delay * (-spare_capacity * target_answer_time).exp()) * 100.0
}

/// Average speed of answer over all calls, queued or not.
///
/// ```
/// use teletraf_traffic_core::average_wait_time;
///
/// // 10 Erlangs, 15 agents, 180 s mean handle time: callers wait ~3.7 s
/// let wait = average_wait_time(10.0, 15, 180.0)?;
/// assert!((wait - 3.67).abs() < 1e-2);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `channels` - Number of serving channels
/// * `mean_service_time` - Mean time to serve one call; the result is in
///   the same unit
///
/// # Returns
///
/// The mean wait averaged over all calls, including those answered at once.
/// A saturated system (load at or above the channel count) yields
/// `f64::INFINITY`.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if any
/// argument is negative or non-finite, or if `channels` is 0.
pub fn average_wait_time(
    offered_load: Erlangs,
    channels: ChannelCount,
    mean_service_time: f64,
) -> Result<f64> {
    validate_load(offered_load)?;
    validate_channels(channels)?;
    validate_non_negative("mean service time", mean_service_time)?;

    if offered_load >= channels as f64 {
        debug!(offered_load, channels, "load at or above capacity, wait is unbounded");
        return Ok(f64::INFINITY);
    }

    let blocking = erlang_b(offered_load, channels)?;
    let delay = delay_from_blocking(blocking, offered_load, channels);
    Ok(wait_from_delay(delay, offered_load, channels, mean_service_time))
}

/// Percentage of calls answered within a target time.
///
/// ```
/// use teletraf_traffic_core::service_level;
///
/// // 10 Erlangs, 15 agents: ~89.8% of calls are answered immediately
/// let level = service_level(10.0, 15, 0.0)?;
/// assert!((level - 89.8).abs() < 0.1);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `channels` - Number of serving channels
/// * `target_answer_time` - Answer-time target, in multiples of the mean
///   service time
///
/// # Returns
///
/// The service level as a percentage in [0, 100]. A target of 0 gives the
/// fraction answered with no wait at all. A saturated system yields 0.0.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if any
/// argument is negative or non-finite, or if `channels` is 0.
pub fn service_level(
    offered_load: Erlangs,
    channels: ChannelCount,
    target_answer_time: f64,
) -> Result<f64> {
    validate_load(offered_load)?;
    validate_channels(channels)?;
    validate_non_negative("target answer time", target_answer_time)?;

    if offered_load >= channels as f64 {
        debug!(offered_load, channels, "load at or above capacity, service level is 0");
        return Ok(0.0);
    }

    let blocking = erlang_b(offered_load, channels)?;
    let delay = delay_from_blocking(blocking, offered_load, channels);
    Ok(service_level_from_delay(
        delay,
        offered_load,
        channels,
        target_answer_time,
    ))
}
