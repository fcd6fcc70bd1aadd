//! Hardware Resource Management
//!
//! Allocates pins and peripherals to the tasks that own them. Every group
//! below goes to exactly one task, except the status LEDs which are shared
//! through [`crate::system::indicator`].
//!
//! # Resource Groups
//! - Sensor: alcohol sensor analog input and the ADC
//! - Button: start button, active low with internal pull-up
//! - LEDs: alert (red) and safe (green) status LEDs
//! - Buzzer: PWM driven alarm buzzer
//! - Display: BCD latch bus of the 4 digit 7-segment display
//! - Camera: MODE and SHUTTER button lines of the evidence camera

use assign_resources::assign_resources;
use embassy_rp::adc::InterruptHandler as AdcInterruptHandler;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;

assign_resources! {
    /// Alcohol sensor output (0-3.3V) on ADC0
    sensor: SensorResources {
        adc: ADC,
        pin: PIN_26,
    },
    /// Start button, pulls the line low when pressed
    button: ButtonResources {
        pin: PIN_15,
    },
    /// Status LEDs
    leds: LedResources {
        alert: PIN_16,
        safe: PIN_17,
    },
    /// Alarm buzzer on PWM slice 1 channel A
    buzzer: BuzzerResources {
        slice: PWM_SLICE1,
        pin: PIN_18,
    },
    /// Display latch bus: BCD data D0-D3, digit address A0-A1, strobe
    display: DisplayResources {
        d0: PIN_2,
        d1: PIN_3,
        d2: PIN_4,
        d3: PIN_5,
        a0: PIN_6,
        a1: PIN_7,
        strobe: PIN_8,
    },
    /// Camera button lines
    camera: CameraResources {
        mode: PIN_10,
        shutter: PIN_11,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});
