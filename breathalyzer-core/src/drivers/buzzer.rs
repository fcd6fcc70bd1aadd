//! PWM alarm buzzer
//!
//! The PWM frequency is fixed by whoever configures the slice; this driver
//! only switches the duty cycle between the tone duty and fully off.

use embedded_hal::pwm::SetDutyCycle;

use crate::config::Tone;
use crate::hardware::Buzzer;

pub struct PwmBuzzer<P> {
    pwm: P,
    tone: Tone,
}

impl<P: SetDutyCycle> PwmBuzzer<P> {
    /// Takes a PWM output already running at `tone.frequency_hz`. Starts silent.
    pub fn new(mut pwm: P, tone: Tone) -> Self {
        let _ = pwm.set_duty_cycle_fully_off();
        Self { pwm, tone }
    }
}

impl<P: SetDutyCycle> Buzzer for PwmBuzzer<P> {
    fn tone_on(&mut self) {
        let _ = self
            .pwm
            .set_duty_cycle_fraction(self.tone.duty_num, self.tone.duty_denom);
    }

    fn tone_off(&mut self) {
        let _ = self.pwm.set_duty_cycle_fully_off();
    }
}
