//! # Traffic-Core: Erlang Traffic Engineering Library
//!
//! This library provides numerically stable implementations of the Erlang
//! traffic formulas for telephony capacity planning. It answers the classic
//! trunk and agent sizing questions: how much traffic a trunk group can
//! carry at a given blocking probability, how long callers wait in a queue,
//! and how many servers a workload needs to hit a service-level target.
//!
//! ## Features
//!
//! - **Erlang B**: Blocking probability for loss systems, evaluated by the
//!   bounded recurrence rather than factorials, stable for thousands of
//!   channels
//! - **Erlang C**: Delay probability for waiting systems, derived from
//!   Erlang B through the standard identity
//! - **Queue metrics**: Average wait time and service level for M/M/c queues
//! - **Dimensioning**: Minimal channel and agent counts for blocking and
//!   service-level goals, each in a single recurrence pass
//! - **Load conversion**: Call rates and durations to offered Erlangs
//!
//! ## Usage
//!
//! ```rust
//! use teletraf_traffic_core::{channels_for_blocking, offered_load, service_level};
//!
//! // 0.5 calls/s at 120 s mean duration is 60 Erlangs of offered traffic
//! let load = offered_load(0.5, 120.0)?;
//!
//! // Trunks needed to block less than 1% of calls
//! let trunks = channels_for_blocking(load, 0.01)?;
//! assert_eq!(trunks, 75);
//!
//! // Service level those trunks give as a queue, answering within no wait
//! let level = service_level(load, trunks, 0.0)?;
//! assert!(level > 90.0);
//! # Ok::<(), teletraf_traffic_core::TrafficError>(())
//! ```
//!
//! ## Saturation
//!
//! An offered load at or above the channel count leaves a waiting system
//! with no steady state. The delay-side functions report that condition in
//! the values themselves (delay probability 1.0, infinite wait, 0% service
//! level) instead of returning an error, so sweeping a load range never
//! aborts halfway.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod blocking;
pub mod delay;
pub mod dimensioning;
pub mod error;
pub mod load;
pub mod types;
pub mod validation;

// Re-export commonly used types and functions
pub use blocking::erlang_b;
pub use delay::{average_wait_time, erlang_c, service_level};
pub use dimensioning::{agents_for_service_level, channels_for_blocking, MAX_SEARCH_CHANNELS};
pub use error::{Result, TrafficError};
pub use load::{offered_load, offered_load_hourly};
pub use types::{ChannelCount, Erlangs, GradeOfService};

/// Version information for the traffic library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the traffic library
///
/// This function should be called once at program startup to set up
/// logging. It's safe to call multiple times.
///
/// # Errors
///
/// Currently always succeeds; the `Result` is kept for future setup steps.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("Traffic-Core v{} initialized", VERSION);

    Ok(())
}

/// Evaluate every grade-of-service figure for a queue in one call.
///
/// Runs the blocking recurrence once and derives the delay probability,
/// average wait, and service level from it, so the fields agree bit for bit
/// with the individual functions.
///
/// ```rust
/// use teletraf_traffic_core::grade_of_service;
///
/// let report = grade_of_service(10.0, 15, 180.0, 0.0)?;
/// assert!((report.blocking_probability - 0.0365).abs() < 1e-3);
/// assert!((report.delay_probability - 0.1020).abs() < 1e-3);
/// assert!((report.average_wait - 3.67).abs() < 1e-2);
/// # Ok::<(), teletraf_traffic_core::TrafficError>(())
/// ```
///
/// # Arguments
///
/// * `offered_load` - Offered traffic in Erlangs
/// * `channels` - Number of serving channels
/// * `mean_service_time` - Mean time to serve one call; `average_wait` is
///   in the same unit
/// * `target_answer_time` - Answer-time target for `service_level`, in
///   multiples of the mean service time
///
/// # Errors
///
/// Returns [`TrafficError::InvalidArgument`] if any argument is negative or
/// non-finite, or if `channels` is 0. Saturation is not an error; see
/// [`GradeOfService`].
pub fn grade_of_service(
    offered_load: Erlangs,
    channels: ChannelCount,
    mean_service_time: f64,
    target_answer_time: f64,
) -> Result<GradeOfService> {
    validation::validate_non_negative("mean service time", mean_service_time)?;
    validation::validate_non_negative("target answer time", target_answer_time)?;

    let blocking_probability = erlang_b(offered_load, channels)?;

    if offered_load >= channels as f64 {
        return Ok(GradeOfService {
            offered_load,
            channels,
            blocking_probability,
            delay_probability: 1.0,
            average_wait: f64::INFINITY,
            service_level: 0.0,
        });
    }

    let delay_probability = delay::delay_from_blocking(blocking_probability, offered_load, channels);
    Ok(GradeOfService {
        offered_load,
        channels,
        blocking_probability,
        delay_probability,
        average_wait: delay::wait_from_delay(
            delay_probability,
            offered_load,
            channels,
            mean_service_time,
        ),
        service_level: delay::service_level_from_delay(
            delay_probability,
            offered_load,
            channels,
            target_answer_time,
        ),
    })
}
