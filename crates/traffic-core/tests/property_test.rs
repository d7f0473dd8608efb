//! Falsification tests for the formula invariants

use proptest::prelude::*;
use teletraf_traffic_core::{
    agents_for_service_level, average_wait_time, channels_for_blocking, erlang_b, erlang_c,
    grade_of_service, service_level,
};

proptest! {
    /// Blocking probability is a probability for any valid input.
    #[test]
    fn prop_blocking_bounded(load in 0.0..500.0f64, channels in 1u32..400) {
        let blocking = erlang_b(load, channels).unwrap();
        prop_assert!((0.0..=1.0).contains(&blocking));
    }

    /// Adding a channel lowers blocking, strictly until f64 resolution
    /// runs out near zero.
    #[test]
    fn prop_blocking_decreases_with_channels(load in 0.1..200.0f64, channels in 1u32..200) {
        let before = erlang_b(load, channels).unwrap();
        let after = erlang_b(load, channels + 1).unwrap();
        if before > 1e-12 {
            prop_assert!(after < before, "B went {} -> {} adding a channel", before, after);
        } else {
            prop_assert!(after <= before);
        }
    }

    /// Offering more traffic never lowers blocking.
    #[test]
    fn prop_blocking_increases_with_load(
        load in 0.0..100.0f64,
        extra in 0.001..50.0f64,
        channels in 1u32..150,
    ) {
        let lighter = erlang_b(load, channels).unwrap();
        let heavier = erlang_b(load + extra, channels).unwrap();
        prop_assert!(heavier >= lighter - 1e-12);
    }

    /// Queueing delays at least as many calls as a loss system drops.
    #[test]
    fn prop_delay_at_least_blocking(load in 0.0..120.0f64, channels in 1u32..160) {
        prop_assume!(load < channels as f64);
        let blocking = erlang_b(load, channels).unwrap();
        let delay = erlang_c(load, channels).unwrap();
        prop_assert!(delay >= blocking - 1e-12);
        prop_assert!(delay <= 1.0);
    }

    /// At or past saturation every sentinel fires at once.
    #[test]
    fn prop_saturation_sentinels(channels in 1u32..1000, excess in 0.0..100.0f64) {
        let load = channels as f64 + excess;
        prop_assert_eq!(erlang_c(load, channels).unwrap(), 1.0);
        prop_assert!(average_wait_time(load, channels, 180.0).unwrap().is_infinite());
        prop_assert_eq!(service_level(load, channels, 0.5).unwrap(), 0.0);
    }

    /// The trunk search returns the smallest count meeting the goal.
    #[test]
    fn prop_channel_search_minimal(load in 0.1..300.0f64, goal in 0.001..0.5f64) {
        let channels = channels_for_blocking(load, goal).unwrap();
        prop_assert!(erlang_b(load, channels).unwrap() < goal);
        if channels > 1 {
            prop_assert!(erlang_b(load, channels - 1).unwrap() >= goal);
        }
    }

    /// The agent search returns the smallest count meeting the goal.
    #[test]
    fn prop_agent_search_minimal(
        load in 0.5..50.0f64,
        target in 0.0..3.0f64,
        goal in 50.0..99.9f64,
    ) {
        let agents = agents_for_service_level(load, target, goal).unwrap();
        prop_assert!((agents as f64) > load);
        prop_assert!(service_level(load, agents, target).unwrap() >= goal);
        if (agents - 1) as f64 > load {
            prop_assert!(service_level(load, agents - 1, target).unwrap() < goal);
        }
    }

    /// The aggregate report carries exactly the per-function values.
    #[test]
    fn prop_grade_of_service_consistent(
        load in 0.0..80.0f64,
        channels in 1u32..100,
        mean_service_time in 1.0..600.0f64,
        target in 0.0..2.0f64,
    ) {
        let report = grade_of_service(load, channels, mean_service_time, target).unwrap();
        prop_assert_eq!(report.blocking_probability, erlang_b(load, channels).unwrap());
        prop_assert_eq!(report.delay_probability, erlang_c(load, channels).unwrap());
        prop_assert_eq!(
            report.average_wait,
            average_wait_time(load, channels, mean_service_time).unwrap()
        );
        prop_assert_eq!(report.service_level, service_level(load, channels, target).unwrap());
        prop_assert_eq!(report.is_saturated(), load >= channels as f64);
    }

    /// No traffic means no blocking, no waiting, full service.
    #[test]
    fn prop_zero_load_is_ideal(channels in 1u32..500, target in 0.0..5.0f64) {
        prop_assert_eq!(erlang_b(0.0, channels).unwrap(), 0.0);
        prop_assert_eq!(erlang_c(0.0, channels).unwrap(), 0.0);
        prop_assert_eq!(average_wait_time(0.0, channels, 200.0).unwrap(), 0.0);
        prop_assert_eq!(service_level(0.0, channels, target).unwrap(), 100.0);
    }
}
