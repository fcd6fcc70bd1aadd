//! Measurement control loop
//!
//! The control loop is the only writer of [`Mode`]. It suspends at exactly two
//! points, both as a wait on the event stream:
//! - for `MeasurementComplete` after starting a conversion
//! - for `ButtonPressed` while idle
//!
//! # Cycle
//! 1. clear the high flag
//! 2. safe LED on (measuring)
//! 3. start a conversion and suspend until the handler has finished with it;
//!    completions carrying another request's sequence number are dropped
//! 4. settle delay
//! 5. high reading: back to idle (button rearmed, blinking)
//! 6. otherwise: inter-measurement delay
//!
//! The owner calls [`Controller::wait_for_start`] whenever the mode is Idle and
//! [`Controller::cycle`] otherwise.

use embassy_futures::select::{select, Either};
use embedded_hal_async::delay::DelayNs;

use crate::config::Timing;
use crate::conversion::Measurement;
use crate::error::Error;
use crate::hardware::{Indicators, Led};
use crate::state::{Mode, SharedState};

/// Events that resume the suspended control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced start button press
    ButtonPressed,
    /// The conversion handler is done with the sample of request `sequence`
    MeasurementComplete { sequence: u32, measurement: Measurement },
}

/// The handler side as seen from the control loop
#[allow(async_fn_in_trait)]
pub trait Handlers {
    /// Starts one analog conversion. The handler posts `MeasurementComplete`
    /// carrying the same `sequence` once all of its side effects are done.
    async fn start_conversion(&mut self, sequence: u32);

    /// Enables the start button watcher.
    fn arm_button(&mut self);

    /// Starts the idle blink timer.
    fn start_blinking(&mut self);

    /// Drops every event that has not been received yet.
    fn discard_events(&mut self);

    /// Suspends until the next event arrives.
    async fn next_event(&mut self) -> Event;
}

/// Mode state machine driving the measurement cycle
pub struct Controller<'a, H, L, T> {
    state: &'a SharedState,
    handlers: H,
    leds: L,
    delay: T,
    timing: Timing,
    next_sequence: u32,
    /// Conversion that was started but whose completion has not arrived
    outstanding: Option<u32>,
}

impl<'a, H, L, T> Controller<'a, H, L, T>
where
    H: Handlers,
    L: Indicators,
    T: DelayNs,
{
    pub fn new(state: &'a SharedState, handlers: H, leds: L, delay: T, timing: Timing) -> Self {
        Self {
            state,
            handlers,
            leds,
            delay,
            timing,
            next_sequence: 0,
            outstanding: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Goes to Idle: button armed, stale presses dropped, alert LED on, safe
    /// LED off, blinking.
    ///
    /// Only called with no conversion outstanding, so the only events the
    /// discard can hit are presses made before the idle phase began.
    pub fn enter_idle(&mut self) {
        self.handlers.arm_button();
        self.handlers.discard_events();
        self.state.set_mode(Mode::Idle);
        self.leds.set(Led::Alert, true);
        self.leds.set(Led::Safe, false);
        self.handlers.start_blinking();
    }

    /// Suspends until the start button is pressed, then switches to Running
    /// with both LEDs off. Returns at once when already Running.
    pub async fn wait_for_start(&mut self) {
        if self.state.mode() == Mode::Running {
            return;
        }
        while self.handlers.next_event().await != Event::ButtonPressed {}

        // The blinker checks the mode on each tick, so it is stopped before
        // the LEDs go dark
        self.state.set_mode(Mode::Running);
        self.leds.set(Led::Alert, false);
        self.leds.set(Led::Safe, false);
    }

    /// Runs one measurement cycle.
    ///
    /// Ends in Idle after a high reading, in Running otherwise. After a
    /// timeout the next cycle starts no new conversion; it keeps waiting for
    /// the outstanding one, whose handler may still set the high flag.
    pub async fn cycle(&mut self) -> Result<Measurement, Error> {
        let sequence = match self.outstanding {
            Some(sequence) => sequence,
            None => {
                self.state.set_high(false);
                self.leds.set(Led::Safe, true);

                let sequence = self.next_sequence;
                self.next_sequence = self.next_sequence.wrapping_add(1);
                self.outstanding = Some(sequence);
                self.handlers.start_conversion(sequence).await;
                sequence
            }
        };

        let measurement = self.wait_for_measurement(sequence).await?;
        self.outstanding = None;

        self.delay.delay_ms(self.timing.settle_ms).await;

        if self.state.is_high() {
            self.enter_idle();
        } else {
            self.delay.delay_ms(self.timing.inter_measurement_ms).await;
        }

        Ok(measurement)
    }

    async fn wait_for_measurement(&mut self, sequence: u32) -> Result<Measurement, Error> {
        let Some(after_ms) = self.timing.conversion_timeout_ms else {
            return Ok(next_measurement(&mut self.handlers, sequence).await);
        };

        match select(
            next_measurement(&mut self.handlers, sequence),
            self.delay.delay_ms(after_ms),
        )
        .await
        {
            Either::First(measurement) => Ok(measurement),
            Either::Second(()) => Err(Error::ConversionTimeout { after_ms }),
        }
    }
}

/// Waits for the completion of conversion `sequence`. Completions of other
/// requests and button presses while Running are dropped.
async fn next_measurement<H: Handlers>(handlers: &mut H, sequence: u32) -> Measurement {
    loop {
        if let Event::MeasurementComplete {
            sequence: completed,
            measurement,
        } = handlers.next_event().await
        {
            if completed == sequence {
                return measurement;
            }
        }
    }
}
