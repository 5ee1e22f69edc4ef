//! Interrupt-safe sharing of a [`Stopwatch`] between handlers and the main loop.
//!
//! Every access runs inside a `critical_section`, so the tick handler, the edge
//! handlers and the main loop never observe a half-applied update, on single-
//! or multi-core targets alike. Counters are only written from
//! [`on_tick`](SharedStopwatch::on_tick); the edge handlers only touch the flags.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::display::DisplayDigits;
use crate::stopwatch::{Indicator, Stopwatch};

/// A [`Stopwatch`] that can live in a `static` and be reached from interrupts.
///
/// Starts empty; hand it the stopwatch with [`init`](Self::init) once the
/// indicator hardware is ready. Until then all handlers are no-ops.
///
/// ```
/// use palette::Srgb;
/// use tick_stopwatch::{Indicator, SharedStopwatch, Stopwatch};
///
/// struct Led;
/// impl Indicator for Led {
///     fn set_color(&mut self, _color: Srgb) {}
/// }
///
/// static STOPWATCH: SharedStopwatch<Led> = SharedStopwatch::new();
///
/// STOPWATCH.init(Stopwatch::new(Led));
/// STOPWATCH.on_control_edge(0x04);
/// STOPWATCH.on_tick();
/// assert!(STOPWATCH.digits().is_some());
/// ```
pub struct SharedStopwatch<L: Indicator> {
    inner: Mutex<RefCell<Option<Stopwatch<L>>>>,
}

impl<L: Indicator> SharedStopwatch<L> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs the stopwatch, replacing any previous one.
    pub fn init(&self, stopwatch: Stopwatch<L>) {
        critical_section::with(|cs| {
            *self.inner.borrow_ref_mut(cs) = Some(stopwatch);
        });
        info!("stopwatch installed");
    }

    /// Runs `f` on the stopwatch inside a critical section.
    ///
    /// Returns `None` if [`init`](Self::init) has not been called.
    pub fn with<R>(&self, f: impl FnOnce(&mut Stopwatch<L>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Body of the 1ms timer interrupt.
    pub fn on_tick(&self) {
        self.with(|stopwatch| stopwatch.tick());
    }

    /// Body of the primary button module's edge interrupt.
    pub fn on_control_edge(&self, status: u8) {
        self.with(|stopwatch| stopwatch.handle_control_edge(status));
    }

    /// Body of the secondary button group's edge interrupt.
    pub fn on_selection_edge(&self, status: u8) {
        self.with(|stopwatch| stopwatch.handle_selection_edge(status));
    }

    /// Snapshot of the display digits.
    pub fn digits(&self) -> Option<DisplayDigits> {
        self.with(|stopwatch| stopwatch.digits())
    }

    /// Returns true once a stopwatch has been installed.
    pub fn is_initialized(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }
}

impl<L: Indicator> Default for SharedStopwatch<L> {
    fn default() -> Self {
        Self::new()
    }
}
