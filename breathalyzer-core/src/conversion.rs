//! BAC conversion
//!
//! Maps a raw sensor count to a blood alcohol concentration estimate.
//!
//! # Formula
//! ```text
//! BAC = 1000 * (raw - 100) / 2750    for raw > 100
//! BAC = 0                            otherwise
//! ```
//! Counts at or below the baseline are sensor drift around its idle reading
//! and clamp to zero. Integer division truncates.

/// Sensor idle reading; nothing at or below it counts as alcohol
pub const SENSOR_BASELINE: u16 = 100;

/// Counts above baseline per 1000 BAC units
const COUNTS_PER_MILLE: u32 = 2750;

/// BAC at or above this is a high reading
pub const THRESHOLD: u16 = 80;

/// Number of digits on the display
pub const DISPLAY_DIGITS: usize = 4;

/// Result of one conversion cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Raw sensor count as delivered by the ADC
    pub raw: u16,
    /// Derived BAC value
    pub bac: u16,
    /// Whether the BAC reached [`THRESHOLD`]
    pub high: bool,
}

impl Measurement {
    /// Converts a raw sample and classifies it against the threshold
    pub fn from_raw(raw: u16) -> Self {
        let bac = bac_from_raw(raw);
        Self {
            raw,
            bac,
            high: is_high(bac),
        }
    }
}

/// Converts a raw sensor count into a BAC value.
pub fn bac_from_raw(raw: u16) -> u16 {
    if raw <= SENSOR_BASELINE {
        return 0;
    }
    let above = u32::from(raw - SENSOR_BASELINE);
    // 65435 counts above baseline gives 23794, always fits
    (1000 * above / COUNTS_PER_MILLE) as u16
}

/// Whether a BAC value calls for the alarm and photo.
pub fn is_high(bac: u16) -> bool {
    bac >= THRESHOLD
}

/// The part of a value the 4 digit display can show.
///
/// Higher digits are dropped, 12345 shows as 2345.
pub fn display_value(value: u16) -> u16 {
    value % 10_000
}

/// Splits a value into its four lowest decimal digits, least significant first.
pub fn digits(value: u16) -> [u8; DISPLAY_DIGITS] {
    let mut rest = display_value(value);
    let mut out = [0; DISPLAY_DIGITS];
    for digit in out.iter_mut() {
        *digit = (rest % 10) as u8;
        rest /= 10;
    }
    out
}
