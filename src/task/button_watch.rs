//! Start Button Module
//!
//! Watches the start button for a falling edge (pressed, pull-up makes idle
//! high) and posts a press to the control loop. After a press the button is
//! deaf for the debounce window; edges inside it are counted and dropped.

use breathalyzer_core::debounce::{ButtonGate, GateState};
use breathalyzer_core::Event;
use defmt::{debug, info};
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Instant, Timer};

use crate::system::event;
use crate::system::resources::ButtonResources;
use crate::system::state::TIMING;

/// Start button task
#[embassy_executor::task]
pub async fn button_watch(r: ButtonResources) {
    let mut button = Input::new(r.pin, Pull::Up);
    let mut gate = ButtonGate::new();
    let window = Duration::from_millis(u64::from(TIMING.debounce_ms));
    let mut window_end = Instant::now();

    info!("Button watcher started");
    loop {
        match gate.state() {
            GateState::Disarmed => {
                event::wait_button_armed().await;
                gate.arm();
            }
            GateState::Listening => {
                button.wait_for_falling_edge().await;
                if gate.on_edge() {
                    window_end = Instant::now() + window;
                    info!("Start button pressed");
                    event::send(Event::ButtonPressed).await;
                }
            }
            GateState::Debouncing => match select(Timer::at(window_end), button.wait_for_falling_edge()).await {
                Either::First(()) => gate.on_window_elapsed(),
                Either::Second(()) => {
                    gate.on_edge();
                    debug!("Press inside debounce window ignored ({} so far)", gate.ignored());
                }
            },
        }
    }
}
