//! # Metrics-Core: Traffic and Call Center Analytics
//!
//! This library provides the descriptive performance metrics used in
//! trunk group and call center reporting: utilization and intensity
//! figures, carried and overflow traffic, busy hour estimation, and the
//! per-call operational ratios (completion, abandonment, occupancy,
//! handling time, speed of answer).
//!
//! Every function here is a pure, total computation over measured
//! figures. Zero denominators read as "nothing measured" and yield 0;
//! the fallible probability work lives in `teletraf-traffic-core`, and
//! the two compose naturally.
//!
//! ## Usage
//!
//! ```rust
//! use teletraf_metrics_core::{
//!     busy_hour_traffic, effective_traffic, overflow_traffic, DEFAULT_BUSY_HOUR_FRACTION,
//! };
//! use teletraf_traffic_core::{channels_for_blocking, erlang_b};
//!
//! // Size the busy hour from a daily forecast of 200 Erlangs
//! let peak = busy_hour_traffic(200.0, DEFAULT_BUSY_HOUR_FRACTION);
//!
//! // Provision trunks for 1% blocking, then split the traffic
//! let trunks = channels_for_blocking(peak, 0.01)?;
//! let blocking = erlang_b(peak, trunks)?;
//! let carried = effective_traffic(peak, blocking);
//! let lost = overflow_traffic(peak, blocking);
//! assert!((carried + lost - peak).abs() < 1e-9);
//! assert!(lost < peak * 0.01);
//! # Ok::<(), teletraf_traffic_core::TrafficError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod center;
pub mod traffic;

// Re-export commonly used functions
pub use center::{
    agent_occupancy, average_call_handling_time, average_speed_of_answer, call_abandonment_rate,
    call_completion_rate, network_efficiency,
};
pub use traffic::{
    busy_hour_traffic, call_load_per_channel, effective_traffic, overflow_traffic,
    peak_hour_call_attempts, service_accessibility, traffic_intensity, utilization,
    DEFAULT_BUSY_HOUR_FRACTION,
};

/// Version information for the metrics library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
