//! Firmware tasks, one per concurrent actor
pub mod button_watch;
pub mod control;
pub mod idle_blink;
pub mod sample;
