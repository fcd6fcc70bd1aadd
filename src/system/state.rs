//! System State
//!
//! The device wide mode and high reading flag. Written by the control loop and
//! the conversion handler, read by the idle blinker; see
//! [`breathalyzer_core::state`] for who may write what and when.

use breathalyzer_core::{SharedState, Timing};

/// Global mode state, starts Idle
pub static SYSTEM_STATE: SharedState = SharedState::new();

/// Timings used by every task
pub const TIMING: Timing = Timing::DEFAULT;
