//! Integration tests for Timekeeping

mod common;
use common::*;

use tick_stopwatch::{DisplayDigits, StopwatchState, Timekeeping};

fn running() -> Timekeeping {
    let mut state = Timekeeping::new();
    state.start();
    state
}

fn tick_state(state: &mut Timekeeping, count: u32) {
    for _ in 0..count {
        state.tick();
    }
}

#[test]
fn hundred_ticks_yield_one_millis_step() {
    let mut state = running();
    tick_state(&mut state, 100);
    assert_eq!(counters(&state), (0, 0, 1, 0));
}

#[test]
fn thousand_ticks_yield_one_second() {
    let mut state = running();
    tick_state(&mut state, 1_000);
    assert_eq!(counters(&state), (0, 1, 0, 0));
}

#[test]
fn sixty_thousand_ticks_yield_one_minute() {
    let mut state = running();
    tick_state(&mut state, 60_000);
    assert_eq!(counters(&state), (1, 0, 0, 0));
}

#[test]
fn six_hundred_thousand_ticks_wrap_minutes_to_zero() {
    let mut state = running();
    tick_state(&mut state, 600_000);
    assert_eq!(counters(&state), (0, 0, 0, 0));
    assert!(state.is_running());
}

#[test]
fn elapsed_millis_tracks_tick_count_until_wrap() {
    let mut state = running();
    for expected in 1..=5_000u32 {
        state.tick();
        assert_eq!(state.elapsed_millis(), expected);
    }
}

#[test]
fn invariant_holds_across_stop_start_and_reset() {
    let mut state = running();
    for round in 0..40u32 {
        tick_state(&mut state, 7_919 + round * 13);
        assert_invariant(&state);

        match round % 4 {
            0 => state.stop(),
            1 => state.start(),
            2 => state.request_reset(),
            _ => state.start(),
        }
        state.tick();
        assert_invariant(&state);
    }
}

#[test]
fn stopped_ticks_never_change_counters() {
    let mut state = Timekeeping::from_parts(5, 12, 3, 88).unwrap();
    let before = state;
    tick_state(&mut state, 10_000);
    assert_eq!(state, before);
    assert_eq!(state.state(), StopwatchState::Stopped);
}

#[test]
fn reset_zeroes_and_stops_regardless_of_prior_state() {
    for running_before in [false, true] {
        let mut state = Timekeeping::from_parts(7, 33, 6, 42).unwrap();
        if running_before {
            state.start();
        }
        state.request_reset();
        state.tick();

        assert_eq!(counters(&state), (0, 0, 0, 0));
        assert!(!state.is_running());
        assert!(!state.is_reset_pending());
    }
}

#[test]
fn second_tick_after_reset_leaves_state_unchanged() {
    let mut state = running();
    tick_state(&mut state, 4_321);
    state.request_reset();
    state.tick();
    let after_reset = state;

    state.tick();
    assert_eq!(state, after_reset);
}

#[test]
fn start_after_reset_counts_from_zero() {
    let mut state = running();
    tick_state(&mut state, 2_500);
    state.request_reset();
    state.tick();

    state.start();
    tick_state(&mut state, 150);
    assert_eq!(counters(&state), (0, 0, 1, 50));
}

#[test]
fn stop_while_reset_pending_still_resets() {
    let mut state = running();
    tick_state(&mut state, 3_000);
    state.request_reset();
    state.stop();
    assert_eq!(state.state(), StopwatchState::ResetPending);

    state.tick();
    assert_eq!(counters(&state), (0, 0, 0, 0));
    assert_eq!(state.state(), StopwatchState::Stopped);
}

#[test]
fn extraction_splits_seconds_into_two_digits() {
    let state = Timekeeping::from_parts(3, 45, 7, 0).unwrap();
    assert_eq!(state.digits().as_array(), [7, 5, 4, 3]);
    assert_eq!(DisplayDigits::from(&state), state.digits());
}

#[test]
fn extraction_is_pure() {
    let state = Timekeeping::from_parts(9, 9, 9, 9).unwrap();
    let first = state.digits();
    let second = state.digits();
    assert_eq!(first, second);
    assert_eq!(first.as_array(), [9, 9, 0, 9]);
}
