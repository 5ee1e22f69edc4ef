use embedded_hal::digital::v2::OutputPin;
use palette::Srgb;
use tick_stopwatch::{Indicator, digital_channels};

/// Status LED with each color channel on its own GPIO pin
///
/// Channels are either fully on or off, which covers the three indicator
/// states: green while running, red when stopped, dark after a reset.
pub struct GpioRgbLed<R: OutputPin, G: OutputPin, B: OutputPin> {
    red: R,
    green: G,
    blue: B,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> GpioRgbLed<R, G, B> {
    /// Takes the three channel pins and switches them off.
    pub fn new(red: R, green: G, blue: B) -> Self {
        let mut led = Self { red, green, blue };
        led.set_color(Srgb::new(0.0, 0.0, 0.0));
        led
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    let _ = if on { pin.set_high() } else { pin.set_low() };
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> Indicator for GpioRgbLed<R, G, B> {
    fn set_color(&mut self, color: Srgb) {
        let [red, green, blue] = digital_channels(color);
        drive(&mut self.red, red);
        drive(&mut self.green, green);
        drive(&mut self.blue, blue);
    }
}
