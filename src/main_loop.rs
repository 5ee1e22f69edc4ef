//! Foreground loop: extract digits, hand them to the display.

use crate::display::DigitDisplay;
use crate::shared::SharedStopwatch;
use crate::stopwatch::Indicator;

/// Runs one main-loop pass.
///
/// Takes a digit snapshot inside a critical section and renders it outside of
/// it, so a slow display driver never delays the tick interrupt.
///
/// # Returns
/// `true` if a frame was rendered, `false` if the stopwatch is not installed yet.
pub fn service<L: Indicator, D: DigitDisplay>(
    stopwatch: &SharedStopwatch<L>,
    display: &mut D,
) -> bool {
    match stopwatch.digits() {
        Some(digits) => {
            display.render(&digits);
            true
        }
        None => false,
    }
}

/// Runs the main loop forever. Never blocks and never sleeps; pacing is up to
/// the display driver.
pub fn run<L: Indicator, D: DigitDisplay>(stopwatch: &SharedStopwatch<L>, mut display: D) -> ! {
    loop {
        service(stopwatch, &mut display);
    }
}
