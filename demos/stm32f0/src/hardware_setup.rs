use cortex_m::peripheral::{NVIC, SYST};
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, Output, PushPull, gpioa, gpiob, gpioc},
    pac,
    prelude::*,
};

use crate::rgb_led::GpioRgbLed;
use crate::seven_segment::MultiplexedDisplay;

/// State indicator on PA6 (red), PA7 (green), PB0 (blue)
pub type StatusLed = GpioRgbLed<
    gpioa::PA6<Output<PushPull>>,
    gpioa::PA7<Output<PushPull>>,
    gpiob::PB0<Output<PushPull>>,
>;

/// Seven-segment display on port C
pub type Display = MultiplexedDisplay<gpioc::PC<Output<PushPull>>>;

/// EXTI lines of the primary button module (PA2-PA5)
pub const CONTROL_LINES: u32 = 0b11_1100;

/// EXTI lines of the secondary button group (PB8 down, PB9 up)
pub const SELECTION_LINES: u32 = 0b11 << 8;

/// Cycles each display position stays lit per pass
const DIGIT_DWELL_CYCLES: u32 = 8_000;

pub struct HardwareContext {
    pub status_led: StatusLed,
    pub display: Display,
}

/// Initialize all hardware peripherals
///
/// - System clock and SysTick (1ms interrupts)
/// - RGB state LED on plain GPIO
/// - Seven-segment display pins
/// - Rising-edge interrupts for both button groups
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    rprintln!("System clock configured: {} Hz", rcc.clocks.sysclk().0);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let status_led = setup_status_led(gpioa.pa6, gpioa.pa7, gpiob.pb0);
    let display = setup_display(gpioc);
    setup_buttons(
        (gpioa.pa2, gpioa.pa3, gpioa.pa4, gpioa.pa5),
        (gpiob.pb8, gpiob.pb9),
        &dp.SYSCFG,
        &dp.EXTI,
    );

    HardwareContext {
        status_led,
        display,
    }
}

fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

fn setup_status_led(
    pa6: gpioa::PA6<Input<Floating>>,
    pa7: gpioa::PA7<Input<Floating>>,
    pb0: gpiob::PB0<Input<Floating>>,
) -> StatusLed {
    let (red, green, blue) = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_push_pull_output(cs),
            pa7.into_push_pull_output(cs),
            pb0.into_push_pull_output(cs),
        )
    });

    rprintln!("Status LED configured on PA6, PA7, PB0");
    GpioRgbLed::new(red, green, blue)
}

/// Segments a-g on PC0-PC6, decimal point on PC7, digit enables on PC8-PC11
fn setup_display(gpioc: gpioc::Parts) -> Display {
    let display = cortex_m::interrupt::free(|cs| {
        let segments = [
            gpioc.pc0.into_push_pull_output(cs).downgrade(),
            gpioc.pc1.into_push_pull_output(cs).downgrade(),
            gpioc.pc2.into_push_pull_output(cs).downgrade(),
            gpioc.pc3.into_push_pull_output(cs).downgrade(),
            gpioc.pc4.into_push_pull_output(cs).downgrade(),
            gpioc.pc5.into_push_pull_output(cs).downgrade(),
            gpioc.pc6.into_push_pull_output(cs).downgrade(),
        ];
        let decimal_point = gpioc.pc7.into_push_pull_output(cs).downgrade();
        let digits = [
            gpioc.pc8.into_push_pull_output(cs).downgrade(),
            gpioc.pc9.into_push_pull_output(cs).downgrade(),
            gpioc.pc10.into_push_pull_output(cs).downgrade(),
            gpioc.pc11.into_push_pull_output(cs).downgrade(),
        ];
        MultiplexedDisplay::new(segments, decimal_point, digits, DIGIT_DWELL_CYCLES)
    });

    rprintln!("Seven-segment display configured on PC0-PC11");
    display
}

/// Buttons drive their pins high when pressed, so both groups use pull-downs
/// and rising-edge triggers.
fn setup_buttons(
    control: (
        gpioa::PA2<Input<Floating>>,
        gpioa::PA3<Input<Floating>>,
        gpioa::PA4<Input<Floating>>,
        gpioa::PA5<Input<Floating>>,
    ),
    selection: (gpiob::PB8<Input<Floating>>, gpiob::PB9<Input<Floating>>),
    syscfg: &pac::SYSCFG,
    exti: &pac::EXTI,
) {
    let (start, stop, reset, reserved) = control;
    let (down, up) = selection;
    cortex_m::interrupt::free(|cs| {
        start.into_pull_down_input(cs);
        stop.into_pull_down_input(cs);
        reset.into_pull_down_input(cs);
        reserved.into_pull_down_input(cs);
        down.into_pull_down_input(cs);
        up.into_pull_down_input(cs);
    });

    // SYSCFG clock is not enabled by the HAL's RCC setup
    let rcc = unsafe { &*pac::RCC::ptr() };
    rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

    // Lines 2-5 default to port A; route lines 8 and 9 to port B
    syscfg
        .exticr3
        .modify(|_, w| unsafe { w.exti8().bits(1).exti9().bits(1) });

    let lines = CONTROL_LINES | SELECTION_LINES;
    exti.rtsr.modify(|r, w| unsafe { w.bits(r.bits() | lines) });
    exti.ftsr.modify(|r, w| unsafe { w.bits(r.bits() & !lines) });
    exti.pr.write(|w| unsafe { w.bits(lines) });
    exti.imr.modify(|r, w| unsafe { w.bits(r.bits() | lines) });

    unsafe {
        NVIC::unmask(pac::Interrupt::EXTI2_3);
        NVIC::unmask(pac::Interrupt::EXTI4_15);
    }

    rprintln!("Buttons configured: PA2-PA5 (control), PB8-PB9 (selection)");
}

/// Reads and clears the pending flags among `lines`
pub fn take_pending(lines: u32) -> u32 {
    let exti = unsafe { &*pac::EXTI::ptr() };
    let pending = exti.pr.read().bits() & lines;
    exti.pr.write(|w| unsafe { w.bits(pending) });
    pending
}
