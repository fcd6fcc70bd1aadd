//! Collaborator interfaces
//!
//! The control loop and the conversion handler only ever talk to hardware
//! through these traits.

/// The two status LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// Red, lit on a high reading
    Alert,
    /// Green, lit while measuring and after a low reading
    Safe,
}

/// Status LED outputs, write only
pub trait Indicators {
    /// Switches one LED on or off
    fn set(&mut self, led: Led, on: bool);

    /// Inverts one LED
    fn toggle(&mut self, led: Led);
}

/// 4 digit numeric display
pub trait NumericDisplay {
    /// Shows the 4 least significant decimal digits of `value`
    fn render(&mut self, value: u16);
}

/// Alarm tone output
pub trait Buzzer {
    fn tone_on(&mut self);
    fn tone_off(&mut self);
}

/// Evidence camera
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Takes one photo; returns once the camera is powered down again
    async fn capture_photo(&mut self);
}
