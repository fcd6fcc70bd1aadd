//! Status LED Module
//!
//! The alert (red) and safe (green) LEDs are written by the control loop, the
//! conversion handler and the idle blinker. They live behind a blocking
//! critical-section mutex; every access is a few register writes, so nobody
//! holds the lock across an await.

use core::cell::RefCell;

use breathalyzer_core::hardware::{Indicators, Led};
use embassy_rp::gpio::{Level, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::system::resources::LedResources;

/// The LED pair
struct Leds {
    alert: Output<'static>,
    safe: Output<'static>,
}

impl Leds {
    fn pin(&mut self, led: Led) -> &mut Output<'static> {
        match led {
            Led::Alert => &mut self.alert,
            Led::Safe => &mut self.safe,
        }
    }
}

/// Global LED pair, `None` until [`init`] ran
static LEDS: Mutex<CriticalSectionRawMutex, RefCell<Option<Leds>>> = Mutex::new(RefCell::new(None));

/// Takes the LED pins, both off.
///
/// Call once from main before any task is spawned.
pub fn init(r: LedResources) {
    let leds = Leds {
        alert: Output::new(r.alert, Level::Low),
        safe: Output::new(r.safe, Level::Low),
    };
    LEDS.lock(|cell| cell.replace(Some(leds)));
}

/// Handle to the global LED pair, one per task
pub struct SharedLeds;

impl SharedLeds {
    fn with(f: impl FnOnce(&mut Leds)) {
        LEDS.lock(|cell| {
            if let Some(leds) = cell.borrow_mut().as_mut() {
                f(leds);
            }
        });
    }
}

impl Indicators for SharedLeds {
    fn set(&mut self, led: Led, on: bool) {
        Self::with(|leds| leds.pin(led).set_level(Level::from(on)));
    }

    fn toggle(&mut self, led: Led) {
        Self::with(|leds| leds.pin(led).toggle());
    }
}
