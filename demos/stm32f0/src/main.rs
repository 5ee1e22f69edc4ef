#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use tick_stopwatch::{SharedStopwatch, Stopwatch};

mod hardware_setup;
mod rgb_led;
mod seven_segment;

use hardware_setup::{CONTROL_LINES, SELECTION_LINES, StatusLed, take_pending};

static STOPWATCH: SharedStopwatch<StatusLed> = SharedStopwatch::new();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    STOPWATCH.on_tick();
}

/// Lines 2-3: BTN0 (start) and BTN1 (stop)
#[interrupt]
fn EXTI2_3() {
    dispatch_control(take_pending(CONTROL_LINES & 0b1100));
}

/// Lines 4-15: BTN2 (reset), BTN3 (reserved) and the selection buttons
#[interrupt]
fn EXTI4_15() {
    let pending = take_pending((CONTROL_LINES & !0b1100) | SELECTION_LINES);
    dispatch_control(pending & CONTROL_LINES);

    // PB8 -> 0x04 (down), PB9 -> 0x08 (up)
    let selection = pending & SELECTION_LINES;
    for bit in 8..10 {
        if selection & (1 << bit) != 0 {
            STOPWATCH.on_selection_edge(1 << (bit - 6));
        }
    }
}

/// Pin numbers of the module match its status bytes, one edge per bit.
fn dispatch_control(pending: u32) {
    for bit in 2..6 {
        if pending & (1 << bit) != 0 {
            STOPWATCH.on_control_edge(1 << bit);
        }
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Stopwatch ===");

    let hw = hardware_setup::init_hardware();
    STOPWATCH.init(Stopwatch::new(hw.status_led));

    rprintln!("=== System Ready ===");
    rprintln!("  BTN0: start, BTN1: stop, BTN2: reset");

    tick_stopwatch::run(&STOPWATCH, hw.display)
}
