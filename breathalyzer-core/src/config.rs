//! Timing and tone configuration
//!
//! Every delay the device uses is a named value here. Defaults reproduce the
//! original board running its CPU at 1 MHz, where one delay cycle is 1 µs.

/// Control loop, debounce and blink timings, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Pause after a conversion completes before its result is acted on
    pub settle_ms: u32,
    /// Pause between two low readings
    pub inter_measurement_ms: u32,
    /// Window after a button press during which further presses are ignored
    pub debounce_ms: u32,
    /// How long the alarm tone sounds on a high reading
    pub alarm_ms: u32,
    /// Period of the idle LED toggle
    pub blink_period_ms: u32,
    /// Give up on a conversion after this long. `None` waits forever.
    pub conversion_timeout_ms: Option<u32>,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        settle_ms: 1,
        inter_measurement_ms: 500,
        debounce_ms: 250,
        alarm_ms: 500,
        blink_period_ms: 200,
        conversion_timeout_ms: None,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Step timings of the camera power-on, shoot and power-off sequence, in milliseconds
///
/// The camera gives no acknowledgment, these are calibrated against the
/// camera's own reaction times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CameraTiming {
    /// How long a button line is held high for one press
    pub press_ms: u32,
    /// Wait after the power press until the camera is ready to shoot
    pub power_on_ms: u32,
    /// Wait after the shutter press until the photo is stored
    pub save_ms: u32,
    /// Gap between the two presses of the power-off combination
    pub power_off_gap_ms: u32,
    /// Wait after the power-off combination until the camera is down
    pub shutdown_ms: u32,
}

impl CameraTiming {
    pub const DEFAULT: Self = Self {
        press_ms: 250,
        power_on_ms: 1000,
        save_ms: 4000,
        power_off_gap_ms: 250,
        shutdown_ms: 1000,
    };

    /// Total time one capture blocks for
    pub fn total_ms(&self) -> u32 {
        4 * self.press_ms + self.power_on_ms + self.save_ms + self.power_off_gap_ms + self.shutdown_ms
    }
}

impl Default for CameraTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Alarm tone parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Tone frequency
    pub frequency_hz: u32,
    /// Duty cycle as a fraction `duty_num / duty_denom`
    pub duty_num: u16,
    pub duty_denom: u16,
}

impl Tone {
    /// 800 µs period with 420 µs high time
    pub const DEFAULT: Self = Self {
        frequency_hz: 1250,
        duty_num: 420,
        duty_denom: 800,
    };
}

impl Default for Tone {
    fn default() -> Self {
        Self::DEFAULT
    }
}
