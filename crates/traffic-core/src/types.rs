//! Core value types for traffic-engineering computations
//!
//! Every quantity in this crate is a plain value: computations are pure
//! functions of their inputs and nothing here carries shared mutable state.

use serde::{Deserialize, Serialize};

/// Offered traffic intensity in Erlangs.
///
/// One Erlang is one channel continuously occupied: the dimensionless
/// product of arrival rate and mean service time in consistent units.
/// Valid values are non-negative and finite.
pub type Erlangs = f64;

/// Number of serving channels (trunks, lines, or agents).
///
/// Callers must supply at least 1; dimensioning searches produce values in
/// the same range.
pub type ChannelCount = u32;

/// Grade-of-service snapshot for one (load, channels) operating point.
///
/// Bundles the four core outputs of the library so a single evaluation can
/// feed reporting layers without re-running the recurrence. In the unstable
/// regime (offered load at or above the channel count) the fields carry the
/// defined saturation sentinels: delay probability 1.0, infinite wait,
/// service level 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeOfService {
    /// Offered load the snapshot was evaluated for, in Erlangs
    pub offered_load: Erlangs,
    /// Number of serving channels
    pub channels: ChannelCount,
    /// Erlang B blocking probability, in [0, 1]
    pub blocking_probability: f64,
    /// Erlang C delay probability, in [0, 1]; exactly 1.0 when unstable
    pub delay_probability: f64,
    /// Expected wait in queue, in the unit of the mean service time;
    /// infinite when unstable
    pub average_wait: f64,
    /// Percentage of calls answered within the target time, in [0, 100];
    /// 0 when unstable
    pub service_level: f64,
}

impl GradeOfService {
    /// True when the offered load meets or exceeds the channel count
    /// (the queue grows without bound).
    pub fn is_saturated(&self) -> bool {
        self.offered_load >= self.channels as f64
    }
}
