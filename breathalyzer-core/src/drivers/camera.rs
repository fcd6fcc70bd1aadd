//! Evidence camera
//!
//! A consumer camera whose MODE and SHUTTER buttons are wired to two output
//! lines. One capture powers the camera on, shoots, and powers it off again.
//! The camera gives no feedback, so each step just waits its calibrated time.
//!
//! # Sequence
//! ```text
//! press MODE     wait power_on      (power on)
//! press SHUTTER  wait save          (photo)
//! press MODE     wait power_off_gap
//! press SHUTTER  wait shutdown      (power off combination)
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::CameraTiming;
use crate::hardware::Camera;

/// Camera driven through its MODE and SHUTTER button lines
pub struct PhotoCamera<M, S, D> {
    mode: M,
    shutter: S,
    delay: D,
    timing: CameraTiming,
}

impl<M, S, D> PhotoCamera<M, S, D>
where
    M: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    /// Both lines start released (low).
    pub fn new(mut mode: M, mut shutter: S, delay: D, timing: CameraTiming) -> Self {
        let _ = mode.set_low();
        let _ = shutter.set_low();
        Self {
            mode,
            shutter,
            delay,
            timing,
        }
    }
}

/// Holds a button line high for `hold_ms`
async fn press<P: OutputPin, D: DelayNs>(line: &mut P, delay: &mut D, hold_ms: u32) {
    let _ = line.set_high();
    delay.delay_ms(hold_ms).await;
    let _ = line.set_low();
}

impl<M, S, D> Camera for PhotoCamera<M, S, D>
where
    M: OutputPin,
    S: OutputPin,
    D: DelayNs,
{
    async fn capture_photo(&mut self) {
        let t = self.timing;

        press(&mut self.mode, &mut self.delay, t.press_ms).await;
        self.delay.delay_ms(t.power_on_ms).await;

        press(&mut self.shutter, &mut self.delay, t.press_ms).await;
        self.delay.delay_ms(t.save_ms).await;

        press(&mut self.mode, &mut self.delay, t.press_ms).await;
        self.delay.delay_ms(t.power_off_gap_ms).await;
        press(&mut self.shutter, &mut self.delay, t.press_ms).await;
        self.delay.delay_ms(t.shutdown_ms).await;
    }
}
