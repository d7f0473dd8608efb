//! Channel and agent dimensioning searches
//!
//! Answers the inverse questions: how many trunks for a blocking target,
//! how many agents for a service-level target. Both walk the channel count
//! upward carrying the running Erlang B value, so dimensioning for any goal
//! costs a single recurrence pass rather than one full evaluation per
//! candidate, and the value tested at each count is bit-identical to what
//! [`erlang_b`](crate::erlang_b) would return for it.
//!
//! Blocking falls toward the goal as channels are added, but for extreme
//! inputs it can take astronomically many channels to get there (or, for a
//! goal below what f64 resolves, never arrive). The searches give up after
//! [`MAX_SEARCH_CHANNELS`] and report
//! [`TrafficError::ComputationLimitExceeded`](crate::TrafficError) instead
//! of spinning.

use tracing::debug;

use crate::blocking::erlang_b_step;
use crate::delay::{delay_from_blocking, service_level_from_delay};
use crate::error::{Result, TrafficError};
use crate::types::{ChannelCount, Erlangs};
use crate::validation::{
    validate_blocking_goal, validate_load, validate_non_negative, validate_service_level_goal,
};

/// Upper bound on the channel counts a dimensioning search will try.
pub const MAX_SEARCH_CHANNELS: ChannelCount = 1_000_000;

/// Smallest channel count whose blocking probability is below the goal.
///
/// ```
/// use teletraf_traffic_core::channels_for_blocking;
///
/// // 10 Erlangs at under 1% blocking needs 18 trunks
/// let trunks = channels_for_blocking(10.0, 0.01)?;
/// assert_eq!(trunks, 18);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `blocking_goal` - Blocking probability to stay strictly below,
///   exclusive between 0 and 1
///
/// # Returns
///
/// The minimal channel count `c` with `erlang_b(offered_load, c) <
/// blocking_goal`. A zero load is satisfied by a single channel.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) for a
/// negative or non-finite load, or a goal outside (0, 1). Returns
/// [`TrafficError::ComputationLimitExceeded`](crate::TrafficError) if no
/// count up to [`MAX_SEARCH_CHANNELS`] meets the goal.
pub fn channels_for_blocking(offered_load: Erlangs, blocking_goal: f64) -> Result<ChannelCount> {
    validate_load(offered_load)?;
    validate_blocking_goal(blocking_goal)?;

    let mut blocking = 1.0_f64;
    for channels in 1..=MAX_SEARCH_CHANNELS {
        blocking = erlang_b_step(offered_load, blocking, channels);
        if blocking < blocking_goal {
            debug!(offered_load, blocking_goal, channels, "blocking goal met");
            return Ok(channels);
        }
    }

    Err(TrafficError::computation_limit_exceeded(
        "blocking dimensioning",
        MAX_SEARCH_CHANNELS,
    ))
}

/// Smallest agent count whose service level reaches the goal.
///
/// ```
/// use teletraf_traffic_core::agents_for_service_level;
///
/// // 90% answered within half a mean handle time: 13 agents for 10 Erlangs
/// let agents = agents_for_service_level(10.0, 0.5, 90.0)?;
/// assert_eq!(agents, 13);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `target_answer_time` - Answer-time target, in multiples of the mean
///   service time
/// * `service_level_goal` - Percentage of calls to answer within the
///   target, exclusive between 0 and 100
///
/// # Returns
///
/// The minimal agent count whose service level is at least the goal. Counts
/// at or below the offered load are skipped; a queue needs spare capacity
/// before its service level is defined at all.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) for a
/// negative or non-finite load or target time, or a goal outside (0, 100).
/// Returns
/// [`TrafficError::ComputationLimitExceeded`](crate::TrafficError) if no
/// count up to [`MAX_SEARCH_CHANNELS`] reaches the goal.
pub fn agents_for_service_level(
    offered_load: Erlangs,
    target_answer_time: f64,
    service_level_goal: f64,
) -> Result<ChannelCount> {
    validate_load(offered_load)?;
    validate_non_negative("target answer time", target_answer_time)?;
    validate_service_level_goal(service_level_goal)?;

    let mut blocking = 1.0_f64;
    for agents in 1..=MAX_SEARCH_CHANNELS {
        blocking = erlang_b_step(offered_load, blocking, agents);
        if offered_load >= agents as f64 {
            continue;
        }
        let delay = delay_from_blocking(blocking, offered_load, agents);
        let level = service_level_from_delay(delay, offered_load, agents, target_answer_time);
        if level >= service_level_goal {
            debug!(
                offered_load,
                service_level_goal, agents, "service level goal met"
            );
            return Ok(agents);
        }
    }

    Err(TrafficError::computation_limit_exceeded(
        "service level dimensioning",
        MAX_SEARCH_CHANNELS,
    ))
}
