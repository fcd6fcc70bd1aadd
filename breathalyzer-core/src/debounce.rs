//! Start button debounce gate
//!
//! The button fires once, then stays deaf until the debounce window has run
//! out. Whoever owns the button timer reports the edge and the window expiry;
//! the gate decides which edges count.
//!
//! # States
//! ```text
//! Disarmed --arm--> Listening --edge--> Debouncing --window elapsed--> Listening
//! ```
//! Edges while Disarmed or Debouncing are dropped. A second press inside the
//! window is a bounce or an impatient user, never a second start.

/// Button watcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GateState {
    /// Not yet armed, edges are dropped
    Disarmed,
    /// Next falling edge is a press
    Listening,
    /// A press was accepted and the window is still open
    Debouncing,
}

/// Debounce gate for the start button
#[derive(Debug, Clone)]
pub struct ButtonGate {
    state: GateState,
    accepted: u32,
    ignored: u32,
}

impl ButtonGate {
    pub const fn new() -> Self {
        Self {
            state: GateState::Disarmed,
            accepted: 0,
            ignored: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Enables the watcher.
    ///
    /// An open debounce window is left to run out, the watcher comes back on
    /// its own afterwards.
    pub fn arm(&mut self) {
        if self.state == GateState::Disarmed {
            self.state = GateState::Listening;
        }
    }

    /// Reports a falling edge. Returns `true` if it is a press.
    pub fn on_edge(&mut self) -> bool {
        match self.state {
            GateState::Listening => {
                self.state = GateState::Debouncing;
                self.accepted = self.accepted.wrapping_add(1);
                true
            }
            GateState::Disarmed | GateState::Debouncing => {
                self.ignored = self.ignored.wrapping_add(1);
                false
            }
        }
    }

    /// Reports the end of the debounce window.
    pub fn on_window_elapsed(&mut self) {
        if self.state == GateState::Debouncing {
            self.state = GateState::Listening;
        }
    }

    /// Presses accepted so far
    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Edges dropped so far
    pub fn ignored(&self) -> u32 {
        self.ignored
    }
}

impl Default for ButtonGate {
    fn default() -> Self {
        Self::new()
    }
}
