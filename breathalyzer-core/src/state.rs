//! Shared mode state
//!
//! Mode and the high reading flag are the only values that cross between the
//! control loop and the handlers. Each has a single writer at any time:
//! - Mode: written by the control loop only, read by the idle blinker
//! - High flag: cleared by the control loop before a conversion starts, set by
//!   the conversion handler while the control loop is suspended
//!
//! The suspend/resume handoff keeps those windows apart, so plain atomics are
//! enough and nobody ever blocks on this state.

use core::sync::atomic::{AtomicBool, Ordering};

/// Device operation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Waiting for the start button, LEDs blinking
    Idle,
    /// Taking measurements
    Running,
}

/// Mode and high flag, shared between the control loop and the handlers
pub struct SharedState {
    running: AtomicBool,
    high: AtomicBool,
}

impl SharedState {
    /// Starts in Idle with no high reading
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            high: AtomicBool::new(false),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.running.load(Ordering::Acquire) {
            Mode::Running
        } else {
            Mode::Idle
        }
    }

    pub(crate) fn set_mode(&self, mode: Mode) {
        self.running.store(mode == Mode::Running, Ordering::Release);
    }

    /// Whether the last conversion reached the threshold
    pub fn is_high(&self) -> bool {
        self.high.load(Ordering::Acquire)
    }

    pub(crate) fn set_high(&self, high: bool) {
        self.high.store(high, Ordering::Release);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
