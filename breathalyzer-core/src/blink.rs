//! Idle blinker
//!
//! While the device waits for the start button both LEDs toggle on every
//! blink tick. The idle entry lights one of them first, so they alternate.
//! The first tick that finds the device Running ends the blinking; the
//! control loop has already switched the LEDs off by then.

use crate::hardware::{Indicators, Led};
use crate::state::{Mode, SharedState};

/// Tick handler for the idle blink timer
pub struct IdleBlinker<'a> {
    state: &'a SharedState,
    toggles: u32,
}

impl<'a> IdleBlinker<'a> {
    pub fn new(state: &'a SharedState) -> Self {
        Self { state, toggles: 0 }
    }

    /// Handles one timer tick. Returns `false` once the timer should stop.
    pub fn tick<L: Indicators>(&mut self, leds: &mut L) -> bool {
        match self.state.mode() {
            Mode::Idle => {
                leds.toggle(Led::Alert);
                leds.toggle(Led::Safe);
                self.toggles = self.toggles.wrapping_add(1);
                true
            }
            Mode::Running => false,
        }
    }

    /// Number of ticks that toggled the LEDs
    pub fn toggles(&self) -> u32 {
        self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Leds {
        alert: bool,
        safe: bool,
    }

    impl Indicators for Leds {
        fn set(&mut self, led: Led, on: bool) {
            match led {
                Led::Alert => self.alert = on,
                Led::Safe => self.safe = on,
            }
        }

        fn toggle(&mut self, led: Led) {
            match led {
                Led::Alert => self.alert = !self.alert,
                Led::Safe => self.safe = !self.safe,
            }
        }
    }

    #[test]
    fn toggles_alternately_while_idle() {
        let state = SharedState::new();
        let mut leds = Leds {
            alert: true,
            safe: false,
        };
        let mut blinker = IdleBlinker::new(&state);

        assert!(blinker.tick(&mut leds));
        assert!(!leds.alert && leds.safe);
        assert!(blinker.tick(&mut leds));
        assert!(leds.alert && !leds.safe);
        assert_eq!(blinker.toggles(), 2);
    }

    #[test]
    fn stops_without_touching_leds_once_running() {
        let state = SharedState::new();
        state.set_mode(Mode::Running);
        let mut leds = Leds::default();
        let mut blinker = IdleBlinker::new(&state);

        assert!(!blinker.tick(&mut leds));
        assert!(!leds.alert && !leds.safe);
        assert_eq!(blinker.toggles(), 0);
    }

    #[test]
    fn toggle_count_wraps() {
        let state = SharedState::new();
        let mut leds = Leds::default();
        let mut blinker = IdleBlinker::new(&state);
        blinker.toggles = u32::MAX;

        assert!(blinker.tick(&mut leds));
        assert_eq!(blinker.toggles(), 0);
    }
}
