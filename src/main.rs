//! Breathalyzer firmware entry point
//!
//! Initializes the system and spawns the control loop and its handler tasks.

#![no_std]
#![no_main]

use crate::task::{button_watch::button_watch, control::control, idle_blink::idle_blink, sample::sample};
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use system::indicator;
use system::resources::{
    AssignedResources, ButtonResources, BuzzerResources, CameraResources, DisplayResources, LedResources,
    SensorResources,
};
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// System core modules
mod system;
/// Task implementations
mod task;

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    // Split the resources into separate groups for each task
    let r = split_resources!(p);

    // The LEDs are shared by three tasks, take them before any of them runs
    indicator::init(r.leds);

    // Handlers first, so nothing the control loop requests goes unheard
    spawner.spawn(sample(r.sensor, r.display, r.buzzer, r.camera)).unwrap();
    spawner.spawn(button_watch(r.button)).unwrap();
    spawner.spawn(idle_blink()).unwrap();
    spawner.spawn(control()).unwrap();
}
