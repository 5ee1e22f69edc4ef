use embedded_hal::digital::v2::OutputPin;
use tick_stopwatch::{DigitDisplay, DisplayDigits};

/// Segment patterns for 0-9, bit 0 = segment a ... bit 6 = segment g
const PATTERNS: [u8; 10] = [
    0b011_1111, 0b000_0110, 0b101_1011, 0b100_1111, 0b110_0110,
    0b110_1101, 0b111_1101, 0b000_0111, 0b111_1111, 0b110_1111,
];

/// Position whose decimal point separates minutes from seconds
const COLON_POSITION: usize = 3;

/// Four-digit common-cathode display multiplexed from the main loop
///
/// `render` lights each position for `dwell_cycles` CPU cycles in turn.
pub struct MultiplexedDisplay<P: OutputPin> {
    segments: [P; 7],
    decimal_point: P,
    /// Digit enables ordered like `DisplayDigits` (rightmost first)
    digits: [P; 4],
    dwell_cycles: u32,
}

impl<P: OutputPin> MultiplexedDisplay<P> {
    pub fn new(segments: [P; 7], decimal_point: P, digits: [P; 4], dwell_cycles: u32) -> Self {
        let mut display = Self {
            segments,
            decimal_point,
            digits,
            dwell_cycles,
        };
        for digit in display.digits.iter_mut() {
            let _ = digit.set_high();
        }
        display
    }

    fn show(&mut self, position: usize, value: u8) {
        let pattern = PATTERNS[value as usize % PATTERNS.len()];
        for (bit, segment) in self.segments.iter_mut().enumerate() {
            let _ = if pattern & (1 << bit) != 0 {
                segment.set_high()
            } else {
                segment.set_low()
            };
        }
        let _ = if position == COLON_POSITION {
            self.decimal_point.set_high()
        } else {
            self.decimal_point.set_low()
        };

        let _ = self.digits[position].set_low();
        cortex_m::asm::delay(self.dwell_cycles);
        let _ = self.digits[position].set_high();
    }
}

impl<P: OutputPin> DigitDisplay for MultiplexedDisplay<P> {
    fn render(&mut self, digits: &DisplayDigits) {
        for (position, &value) in digits.iter().enumerate() {
            self.show(position, value);
        }
    }
}
