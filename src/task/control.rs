//! Control Loop Module
//!
//! Runs the measurement and mode state machine. The task idles (blinking)
//! until the start button is pressed, then measures until a reading reaches
//! the threshold, then idles again.
//!
//! Suspension is an await on the event channel; while this task waits, the
//! executor sleeps the core until one of the handler tasks posts an event.

use breathalyzer_core::{Controller, Event, Handlers, Mode};
use defmt::{info, warn};
use embassy_time::Delay;

use crate::system::event;
use crate::system::indicator::SharedLeds;
use crate::system::state::{SYSTEM_STATE, TIMING};

/// The handler tasks, reached through the event module
struct TaskHandlers;

impl Handlers for TaskHandlers {
    async fn start_conversion(&mut self, sequence: u32) {
        event::request_conversion(sequence);
    }

    fn arm_button(&mut self) {
        event::arm_button();
    }

    fn start_blinking(&mut self) {
        event::start_blinking();
    }

    fn discard_events(&mut self) {
        event::discard();
    }

    async fn next_event(&mut self) -> Event {
        event::wait().await
    }
}

/// Main control task
#[embassy_executor::task]
pub async fn control() {
    info!("Control loop started");
    let mut controller = Controller::new(&SYSTEM_STATE, TaskHandlers, SharedLeds, Delay, TIMING);

    controller.enter_idle();

    loop {
        if controller.mode() == Mode::Idle {
            info!("Idle, waiting for start button");
            controller.wait_for_start().await;
            info!("Session started");
        }

        match controller.cycle().await {
            Ok(measurement) if measurement.high => {
                info!("High reading: BAC {} (raw {}), back to idle", measurement.bac, measurement.raw);
            }
            Ok(measurement) => {
                info!("BAC {} (raw {})", measurement.bac, measurement.raw);
            }
            Err(e) => {
                warn!("Measurement cycle failed: {}", e);
            }
        }
    }
}
