//! Tests for SimulationClock

use project_simulator_core_rs::SimulationClock;

#[test]
fn test_clock_new() {
    let clock = SimulationClock::new(0.25);
    assert_eq!(clock.elapsed(), 0.0);
    assert_eq!(clock.steps(), 0);
    assert_eq!(clock.dt(), 0.25);
}

#[test]
fn test_advance() {
    let mut clock = SimulationClock::new(0.25);

    clock.advance();
    assert_eq!(clock.elapsed(), 0.25);
    assert_eq!(clock.steps(), 1);

    clock.advance();
    assert_eq!(clock.elapsed(), 0.5);
    assert_eq!(clock.steps(), 2);
}

#[test]
fn test_elapsed_accumulates_rather_than_multiplies() {
    let mut clock = SimulationClock::new(0.1);
    for _ in 0..100 {
        clock.advance();
    }

    // Repeated addition of 0.1 drifts below 10.0
    assert_eq!(clock.steps(), 100);
    assert!(clock.elapsed() < 10.0);
    assert!((clock.elapsed() - 10.0).abs() < 1e-9);
}

#[test]
fn test_horizon_is_inclusive() {
    let mut clock = SimulationClock::new(1.0);
    for _ in 0..10 {
        clock.advance();
    }
    assert!(clock.is_within(10.0));

    clock.advance();
    assert!(!clock.is_within(10.0));
}

#[test]
#[should_panic(expected = "dt must be positive")]
fn test_negative_dt_panics() {
    SimulationClock::new(-1.0);
}
