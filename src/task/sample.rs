//! Sensor Sampling Module
//!
//! Owns the ADC and the devices a reading drives: display, buzzer and camera.
//! For every conversion request it reads the alcohol sensor once, runs the
//! conversion handler and then resumes the control loop with the result.
//!
//! # Hardware
//! - Sensor on ADC0, 12-bit, read through the async ADC driver
//! - Display latch on 7 push-pull outputs
//! - Buzzer on a PWM slice running at the tone frequency
//! - Camera MODE and SHUTTER lines on 2 push-pull outputs

use breathalyzer_core::drivers::{LatchDisplay, PhotoCamera, PwmBuzzer};
use breathalyzer_core::{CameraTiming, ConversionHandler, Event, Tone};
use defmt::{info, warn, Debug2Format};
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::Delay;

use crate::system::event;
use crate::system::indicator::SharedLeds;
use crate::system::resources::{BuzzerResources, CameraResources, DisplayResources, Irqs, SensorResources};
use crate::system::state::{SYSTEM_STATE, TIMING};

/// Alarm tone
const TONE: Tone = Tone::DEFAULT;

/// Sensor sampling task
#[embassy_executor::task]
pub async fn sample(
    sensor: SensorResources,
    display: DisplayResources,
    buzzer: BuzzerResources,
    camera: CameraResources,
) {
    let mut adc = Adc::new(sensor.adc, Irqs, adc::Config::default());
    let mut channel = Channel::new_pin(sensor.pin, Pull::None);

    let display = LatchDisplay::new(
        [
            Output::new(display.d0, Level::Low),
            Output::new(display.d1, Level::Low),
            Output::new(display.d2, Level::Low),
            Output::new(display.d3, Level::Low),
        ],
        [Output::new(display.a0, Level::Low), Output::new(display.a1, Level::Low)],
        Output::new(display.strobe, Level::Low),
    );
    let buzzer = PwmBuzzer::new(tone_pwm(buzzer, TONE.frequency_hz), TONE);
    let camera = PhotoCamera::new(
        Output::new(camera.mode, Level::Low),
        Output::new(camera.shutter, Level::Low),
        Delay,
        CameraTiming::DEFAULT,
    );

    let mut handler = ConversionHandler::new(&SYSTEM_STATE, SharedLeds, display, buzzer, camera, Delay, TIMING);

    info!("Sampler started");
    loop {
        let sequence = event::wait_conversion_request().await;

        // A failed conversion reads as baseline: BAC 0, no alarm
        let raw = match adc.read(&mut channel).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("ADC read failed: {}", Debug2Format(&e));
                0
            }
        };

        let measurement = handler.complete(raw).await;
        event::send(Event::MeasurementComplete { sequence, measurement }).await;
    }
}

/// Sets up the buzzer PWM slice at `freq_hz`, output off
fn tone_pwm(r: BuzzerResources, freq_hz: u32) -> Pwm<'static> {
    let clock_freq_hz = embassy_rp::clocks::clk_sys_freq(); // 150MHz

    // Calculate minimum divider needed to keep period under 16-bit limit (65535)
    let divider = ((clock_freq_hz / freq_hz) / 65535 + 1) as u8;
    let period = (clock_freq_hz / (freq_hz * divider as u32)) as u16 - 1;

    let mut config = pwm::Config::default();
    config.divider = divider.into();
    config.top = period;
    Pwm::new_output_a(r.slice, r.pin, config)
}
