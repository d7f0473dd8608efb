//! # TELETRAF: Telephony Traffic Engineering
//!
//! Umbrella crate bundling the traffic engineering libraries:
//!
//! - [`traffic_core`] - Erlang B/C formulas, queue metrics, and channel
//!   dimensioning
//! - [`metrics_core`] - trunk group and call center performance metrics
//!
//! ## Usage
//!
//! ```rust
//! use teletraf::prelude::*;
//!
//! // Half a call per second, 120 s mean duration: 60 Erlangs offered
//! let load = offered_load(0.5, 120.0)?;
//!
//! // Trunks for 1% blocking, agents for an 80% service level
//! let trunks = channels_for_blocking(load, 0.01)?;
//! let agents = agents_for_service_level(load, 0.5, 80.0)?;
//! assert_eq!(trunks, 75);
//! assert_eq!(agents, 63);
//! # Ok::<(), teletraf::traffic_core::TrafficError>(())
//! ```

#![deny(missing_docs)]

pub use teletraf_metrics_core as metrics_core;
pub use teletraf_traffic_core as traffic_core;

/// Everything a capacity planning script needs, in one import.
pub mod prelude {
    pub use crate::metrics_core::{
        agent_occupancy, average_call_handling_time, average_speed_of_answer, busy_hour_traffic,
        call_abandonment_rate, call_completion_rate, call_load_per_channel, effective_traffic,
        network_efficiency, overflow_traffic, peak_hour_call_attempts, service_accessibility,
        traffic_intensity, utilization, DEFAULT_BUSY_HOUR_FRACTION,
    };
    pub use crate::traffic_core::{
        agents_for_service_level, average_wait_time, channels_for_blocking, erlang_b, erlang_c,
        grade_of_service, offered_load, offered_load_hourly, service_level, ChannelCount, Erlangs,
        GradeOfService, Result, TrafficError, MAX_SEARCH_CHANNELS,
    };
}
