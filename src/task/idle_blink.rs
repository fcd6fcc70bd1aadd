//! Idle Blink Module
//!
//! Toggles both status LEDs every blink period while the device is Idle. The
//! first tick that finds the device Running stops the blinking until the next
//! start request.

use breathalyzer_core::blink::IdleBlinker;
use defmt::info;
use embassy_time::{Duration, Ticker};

use crate::system::event;
use crate::system::indicator::SharedLeds;
use crate::system::state::{SYSTEM_STATE, TIMING};

/// Idle blink task
#[embassy_executor::task]
pub async fn idle_blink() {
    let period = Duration::from_millis(u64::from(TIMING.blink_period_ms));
    let mut leds = SharedLeds;

    info!("Idle blinker started");
    loop {
        event::wait_blink_start().await;

        let mut blinker = IdleBlinker::new(&SYSTEM_STATE);
        let mut ticker = Ticker::every(period);
        loop {
            ticker.next().await;
            if !blinker.tick(&mut leds) {
                break;
            }
        }
        info!("Idle blinking stopped after {} toggles", blinker.toggles());
    }
}
