//! Conversion complete handler
//!
//! Runs on the handler side whenever the ADC delivers a sample, while the
//! control loop is suspended waiting for it. All threshold side effects happen
//! here, before the control loop is resumed:
//! - the BAC is always shown on the display
//! - below the threshold: high flag cleared, safe LED on
//! - at or above the threshold: high flag set, alert LED on, alarm tone for
//!   the alarm duration, then one photo

use embedded_hal_async::delay::DelayNs;

use crate::config::Timing;
use crate::conversion::{display_value, Measurement};
use crate::hardware::{Buzzer, Camera, Indicators, Led, NumericDisplay};
use crate::state::SharedState;

/// Handler for completed conversions
pub struct ConversionHandler<'a, L, D, B, C, T> {
    state: &'a SharedState,
    leds: L,
    display: D,
    buzzer: B,
    camera: C,
    delay: T,
    timing: Timing,
}

impl<'a, L, D, B, C, T> ConversionHandler<'a, L, D, B, C, T>
where
    L: Indicators,
    D: NumericDisplay,
    B: Buzzer,
    C: Camera,
    T: DelayNs,
{
    pub fn new(
        state: &'a SharedState,
        leds: L,
        display: D,
        buzzer: B,
        camera: C,
        delay: T,
        timing: Timing,
    ) -> Self {
        Self {
            state,
            leds,
            display,
            buzzer,
            camera,
            delay,
            timing,
        }
    }

    /// Handles one raw sample and returns the measurement it produced.
    pub async fn complete(&mut self, raw: u16) -> Measurement {
        let measurement = Measurement::from_raw(raw);

        self.display.render(display_value(measurement.bac));

        if !measurement.high {
            self.state.set_high(false);
            self.leds.set(Led::Safe, true);
            return measurement;
        }

        self.state.set_high(true);
        self.leds.set(Led::Safe, false);
        self.leds.set(Led::Alert, true);

        self.buzzer.tone_on();
        self.delay.delay_ms(self.timing.alarm_ms).await;
        self.buzzer.tone_off();

        self.camera.capture_photo().await;

        measurement
    }
}
