//! Call center operational metrics
//!
//! Agent-side ratios computed from call counters and timing totals. All
//! functions are total: a zero denominator means "nothing measured yet"
//! and yields 0 rather than an error.

use teletraf_traffic_core::{ChannelCount, Erlangs};

/// Agent occupancy as a percentage of available agent time.
///
/// Offered load per agent, scaled to 0-100. Values above 100 mean the
/// workload exceeds the team; zero agents yield 0.0.
pub fn agent_occupancy(offered_load: Erlangs, agents: ChannelCount) -> f64 {
    if agents == 0 {
        return 0.0;
    }
    (offered_load / agents as f64) * 100.0
}

/// Percentage of call attempts that completed successfully.
///
/// ```
/// use teletraf_metrics_core::call_completion_rate;
///
/// assert_eq!(call_completion_rate(950, 1000), 95.0);
/// ```
pub fn call_completion_rate(completed_calls: u64, total_calls: u64) -> f64 {
    percentage_of(completed_calls, total_calls)
}

/// Percentage of callers who hung up before being answered.
pub fn call_abandonment_rate(abandoned_calls: u64, total_calls: u64) -> f64 {
    percentage_of(abandoned_calls, total_calls)
}

/// Percentage of call attempts the network carried to completion.
pub fn network_efficiency(successful_calls: u64, total_calls: u64) -> f64 {
    percentage_of(successful_calls, total_calls)
}

/// Average handling time per call, in the unit of `total_talk_time`.
///
/// Zero calls yield 0.0.
pub fn average_call_handling_time(total_talk_time: f64, total_calls: u64) -> f64 {
    if total_calls == 0 {
        return 0.0;
    }
    total_talk_time / total_calls as f64
}

/// Average speed of answer, in the unit of `total_answer_time`.
///
/// Zero answered calls yield 0.0.
pub fn average_speed_of_answer(total_answer_time: f64, total_calls_answered: u64) -> f64 {
    if total_calls_answered == 0 {
        return 0.0;
    }
    total_answer_time / total_calls_answered as f64
}

fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}
