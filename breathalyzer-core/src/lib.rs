//! Breathalyzer core
//!
//! Hardware independent half of the breathalyzer firmware:
//! - BAC conversion from raw sensor counts
//! - Shared mode state (Idle / Running) and the high reading flag
//! - Button debounce gate and idle blinker decisions
//! - The measurement control loop and the conversion complete handler
//! - Generic drivers for the display latch, the alarm buzzer and the camera
//!
//! Everything that touches the outside world goes through the traits in
//! [`hardware`], so the firmware binds real pins and the tests bind recorders.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod config;
pub mod control;
pub mod conversion;
pub mod converter;
pub mod debounce;
pub mod drivers;
pub mod error;
pub mod hardware;
pub mod state;

pub use config::{CameraTiming, Timing, Tone};
pub use control::{Controller, Event, Handlers};
pub use conversion::{bac_from_raw, Measurement, THRESHOLD};
pub use converter::ConversionHandler;
pub use error::Error;
pub use state::{Mode, SharedState};

/// Recording collaborators shared by the unit tests.
#[cfg(test)]
mod tests_support {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use embedded_hal_async::delay::DelayNs;

    use crate::control::{Event, Handlers};
    use crate::converter::ConversionHandler;
    use crate::hardware::{Buzzer, Camera, Indicators, Led, NumericDisplay};
    use crate::{SharedState, Timing};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Call {
        ToneOn,
        ToneOff,
        Photo,
        Delay(u32),
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct LedState {
        pub alert: bool,
        pub safe: bool,
    }

    #[derive(Default)]
    pub struct Rig {
        pub leds: RefCell<LedState>,
        pub rendered: RefCell<Vec<u16>>,
        pub calls: RefCell<Vec<Call>>,
    }

    pub type MockConverter<'a> =
        ConversionHandler<'a, MockLeds<'a>, MockDisplay<'a>, MockBuzzer<'a>, MockCamera<'a>, MockDelay<'a>>;

    impl Rig {
        pub fn leds(&self) -> MockLeds<'_> {
            MockLeds(&self.leds)
        }

        pub fn delay(&self) -> MockDelay<'_> {
            MockDelay(&self.calls)
        }

        pub fn handler<'a>(&'a self, state: &'a SharedState) -> MockConverter<'a> {
            ConversionHandler::new(
                state,
                self.leds(),
                MockDisplay(&self.rendered),
                MockBuzzer(&self.calls),
                MockCamera(&self.calls),
                self.delay(),
                Timing::DEFAULT,
            )
        }

        pub fn rendered(&self) -> Vec<u16> {
            self.rendered.borrow().clone()
        }

        pub fn log(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn alarms(&self) -> usize {
            self.count(Call::ToneOn)
        }

        pub fn photos(&self) -> usize {
            self.count(Call::Photo)
        }

        fn count(&self, call: Call) -> usize {
            self.calls.borrow().iter().filter(|c| **c == call).count()
        }
    }

    pub struct MockLeds<'a>(&'a RefCell<LedState>);

    impl Indicators for MockLeds<'_> {
        fn set(&mut self, led: Led, on: bool) {
            let mut leds = self.0.borrow_mut();
            match led {
                Led::Alert => leds.alert = on,
                Led::Safe => leds.safe = on,
            }
        }

        fn toggle(&mut self, led: Led) {
            let mut leds = self.0.borrow_mut();
            match led {
                Led::Alert => leds.alert = !leds.alert,
                Led::Safe => leds.safe = !leds.safe,
            }
        }
    }

    pub struct MockDisplay<'a>(&'a RefCell<Vec<u16>>);

    impl NumericDisplay for MockDisplay<'_> {
        fn render(&mut self, value: u16) {
            self.0.borrow_mut().push(value);
        }
    }

    pub struct MockBuzzer<'a>(&'a RefCell<Vec<Call>>);

    impl Buzzer for MockBuzzer<'_> {
        fn tone_on(&mut self) {
            self.0.borrow_mut().push(Call::ToneOn);
        }

        fn tone_off(&mut self) {
            self.0.borrow_mut().push(Call::ToneOff);
        }
    }

    pub struct MockCamera<'a>(&'a RefCell<Vec<Call>>);

    impl Camera for MockCamera<'_> {
        async fn capture_photo(&mut self) {
            self.0.borrow_mut().push(Call::Photo);
        }
    }

    /// Completes at once and records the requested time.
    pub struct MockDelay<'a>(pub &'a RefCell<Vec<Call>>);

    impl DelayNs for MockDelay<'_> {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.borrow_mut().push(Call::Delay(ns / 1_000_000));
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Call::Delay(ms));
        }
    }

    /// Event queue and sensor samples fed to the control loop
    #[derive(Default)]
    pub struct Script {
        pub events: VecDeque<Event>,
        pub samples: VecDeque<u16>,
        /// Sequence numbers of every conversion request, in order
        pub requested: Vec<u32>,
        /// Completions are parked in `withheld` instead of being posted
        pub withhold: bool,
        pub withheld: Option<Event>,
        /// A button press is posted right behind each completion
        pub press_after_completion: bool,
        pub arms: u32,
        pub blink_starts: u32,
        pub discards: u32,
    }

    impl Script {
        pub fn with_samples(samples: &[u16]) -> Self {
            Self {
                samples: samples.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub fn conversions(&self) -> usize {
            self.requested.len()
        }

        /// Posts the parked completion, as if it had just arrived.
        pub fn release(&mut self) {
            if let Some(event) = self.withheld.take() {
                self.events.push_back(event);
            }
        }
    }

    /// Runs the conversion handler inline when a conversion is started.
    /// Without a sample left the conversion never completes.
    pub struct MockHandlers<'a> {
        pub script: &'a RefCell<Script>,
        pub converter: MockConverter<'a>,
    }

    impl Handlers for MockHandlers<'_> {
        async fn start_conversion(&mut self, sequence: u32) {
            let sample = {
                let mut script = self.script.borrow_mut();
                script.requested.push(sequence);
                script.samples.pop_front()
            };
            let Some(raw) = sample else { return };

            let measurement = self.converter.complete(raw).await;
            let event = Event::MeasurementComplete {
                sequence,
                measurement,
            };
            let mut script = self.script.borrow_mut();
            if script.withhold {
                script.withheld = Some(event);
            } else {
                script.events.push_back(event);
            }
            if script.press_after_completion {
                script.events.push_back(Event::ButtonPressed);
            }
        }

        fn discard_events(&mut self) {
            let mut script = self.script.borrow_mut();
            script.discards += 1;
            script.events.clear();
        }

        fn arm_button(&mut self) {
            self.script.borrow_mut().arms += 1;
        }

        fn start_blinking(&mut self) {
            self.script.borrow_mut().blink_starts += 1;
        }

        async fn next_event(&mut self) -> Event {
            let next = self.script.borrow_mut().events.pop_front();
            match next {
                Some(event) => event,
                None => core::future::pending().await,
            }
        }
    }
}
