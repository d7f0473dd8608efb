//! Trunk group and network traffic metrics
//!
//! Descriptive ratios computed from measured or forecast traffic figures.
//! Unlike the Erlang formulas these are total functions: a zero
//! denominator reads as "no traffic to measure" and yields 0 rather than
//! an error, so reporting pipelines can run them over raw counters
//! without pre-filtering.

use teletraf_traffic_core::{ChannelCount, Erlangs};

/// Fraction of a day's traffic conventionally assigned to its busy hour.
pub const DEFAULT_BUSY_HOUR_FRACTION: f64 = 0.17;

/// Utilization factor of a channel group: offered load per channel.
///
/// Returns a factor, not a percentage; 1.0 means the group is offered
/// exactly as much traffic as it can carry. Zero channels yield 0.0.
pub fn utilization(offered_load: Erlangs, channels: ChannelCount) -> f64 {
    if channels == 0 {
        return 0.0;
    }
    offered_load / channels as f64
}

/// Traffic intensity of a channel group as a percentage.
///
/// The same ratio as [`utilization`] scaled to 0-100. Zero channels
/// yield 0.0.
pub fn traffic_intensity(offered_load: Erlangs, channels: ChannelCount) -> f64 {
    utilization(offered_load, channels) * 100.0
}

/// Busy hour traffic estimated from a daily total.
///
/// `busy_hour_fraction` is the share of the day's traffic falling in the
/// busiest hour; [`DEFAULT_BUSY_HOUR_FRACTION`] is the customary planning
/// figure.
///
/// ```
/// use teletraf_metrics_core::{busy_hour_traffic, DEFAULT_BUSY_HOUR_FRACTION};
///
/// let busiest = busy_hour_traffic(200.0, DEFAULT_BUSY_HOUR_FRACTION);
/// assert!((busiest - 34.0).abs() < 1e-9);
/// ```
pub fn busy_hour_traffic(daily_load: Erlangs, busy_hour_fraction: f64) -> Erlangs {
    daily_load * busy_hour_fraction
}

/// Traffic successfully carried after blocking losses.
///
/// ```
/// use teletraf_metrics_core::effective_traffic;
/// use teletraf_traffic_core::erlang_b;
///
/// let blocking = erlang_b(10.0, 15)?;
/// let carried = effective_traffic(10.0, blocking);
/// assert!(carried > 9.6 && carried < 10.0);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
pub fn effective_traffic(offered_load: Erlangs, blocking_probability: f64) -> Erlangs {
    offered_load * (1.0 - blocking_probability)
}

/// Traffic turned away by blocking.
///
/// Complements [`effective_traffic`]; the two always sum to the offered
/// load.
pub fn overflow_traffic(offered_load: Erlangs, blocking_probability: f64) -> Erlangs {
    offered_load * blocking_probability
}

/// Estimated call attempts during the busy hour.
///
/// `average_call_duration` is in minutes. A non-positive duration yields
/// 0.0; no finite attempt count produces traffic with zero-length calls.
pub fn peak_hour_call_attempts(busy_hour_load: Erlangs, average_call_duration: f64) -> f64 {
    if average_call_duration <= 0.0 {
        return 0.0;
    }
    busy_hour_load * (60.0 / average_call_duration)
}

/// Average number of calls handled per channel over a period.
///
/// Zero channels yield 0.0.
pub fn call_load_per_channel(total_calls: u64, channels: ChannelCount) -> f64 {
    if channels == 0 {
        return 0.0;
    }
    total_calls as f64 / channels as f64
}

/// Percentage of callers who reach the service without being blocked.
pub fn service_accessibility(blocking_probability: f64) -> f64 {
    (1.0 - blocking_probability) * 100.0
}
