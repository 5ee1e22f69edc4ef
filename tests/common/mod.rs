//! Shared test infrastructure for tick-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use tick_stopwatch::{DigitDisplay, DisplayDigits, Indicator, Stopwatch, Timekeeping};

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock indicator that records all color changes for testing
pub struct MockIndicator {
    current_color: Srgb,
    color_history: heapless::Vec<Srgb, 32>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0.5, 0.5, 0.5),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn get_last_color(&self) -> Srgb {
        self.current_color
    }

    pub fn color_history(&self) -> &[Srgb] {
        &self.color_history
    }
}

impl Indicator for MockIndicator {
    fn set_color(&mut self, color: Srgb) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that keeps the most recent frames
pub struct MockDisplay {
    frames: heapless::Vec<[u8; 4], 64>,
    render_count: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            render_count: 0,
        }
    }

    pub fn last_frame(&self) -> Option<[u8; 4]> {
        self.frames.last().copied()
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl DigitDisplay for MockDisplay {
    fn render(&mut self, digits: &DisplayDigits) {
        if self.frames.is_full() {
            self.frames.remove(0);
        }
        let _ = self.frames.push(digits.as_array());
        self.render_count += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use tick_stopwatch::{COLOR_OFF, COLOR_RUNNING, COLOR_STOPPED};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Calls the tick handler `count` times
pub fn tick_n<L: Indicator>(stopwatch: &mut Stopwatch<L>, count: u32) {
    for _ in 0..count {
        stopwatch.tick();
    }
}

/// Returns `(minutes, seconds, millis, sub_millis)`
pub fn counters(state: &Timekeeping) -> (u8, u8, u8, u8) {
    (
        state.minutes(),
        state.seconds(),
        state.millis(),
        state.sub_millis(),
    )
}

/// Checks every counter against its range
pub fn assert_invariant(state: &Timekeeping) {
    assert!(state.sub_millis() <= 99, "sub_millis {}", state.sub_millis());
    assert!(state.millis() <= 9, "millis {}", state.millis());
    assert!(state.seconds() <= 59, "seconds {}", state.seconds());
    assert!(state.minutes() <= 9, "minutes {}", state.minutes());
}
