//! Erlang B blocking probability
//!
//! Implements the loss-system formula: the probability that an arriving call
//! finds every channel busy and is dropped, for a given offered load and
//! channel count (no queueing, blocked calls are lost).
//!
//! The evaluation uses the classical channel-by-channel recurrence
//!
//! ```text
//! B(0) = 1
//! B(k) = A·B(k-1) / (k + A·B(k-1))    for k = 1..channels
//! ```
//!
//! which is algebraically equal to the closed-form ratio of Poisson terms.
//! Every intermediate B(k) lies in [0, 1], so the evaluation involves no
//! factorials and no powers of the load; the closed form overflows f64 for
//! channel counts beyond ~170, the recurrence never does.

use crate::error::Result;
use crate::types::{ChannelCount, Erlangs};
use crate::validation::{validate_channels, validate_load};

/// Erlang B blocking probability for an offered load and channel count.
///
/// ```
/// use teletraf_traffic_core::erlang_b;
///
/// // 10 Erlangs offered to 15 trunks: about 3.65% of calls are blocked
/// let blocking = erlang_b(10.0, 15)?;
/// assert!((blocking - 0.0365).abs() < 1e-3);
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
/// The blocking probability, in [0, 1]. A zero load yields exactly 0 for any
/// channel count.
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`](crate::TrafficError) if the
/// load is negative or non-finite, or if `channels` is 0.
pub fn erlang_b(offered_load: Erlangs, channels: ChannelCount) -> Result<f64> {
    validate_load(offered_load)?;
    validate_channels(channels)?;

    let mut blocking = 1.0_f64;
    for k in 1..=channels {
        blocking = erlang_b_step(offered_load, blocking, k);
    }

    Ok(blocking)
}

/// One step of the Erlang B recurrence: B(k) from B(k-1).
///
/// `A·B(k-1)` is the traffic overflowing the first `k-1` channels; adding
/// the `k`-th channel blocks the fraction `overflow / (k + overflow)` of it.
/// Shared with the dimensioning search so an incremental scan evaluates the
/// exact same float sequence as a direct call to [`erlang_b`].
pub(crate) fn erlang_b_step(offered_load: Erlangs, previous: f64, k: ChannelCount) -> f64 {
    let overflow = offered_load * previous;
    overflow / (k as f64 + overflow)
}
