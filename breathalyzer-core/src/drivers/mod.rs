//! Drivers for the external collaborators, generic over `embedded-hal` pins
pub mod buzzer;
pub mod camera;
pub mod display;

pub use buzzer::PwmBuzzer;
pub use camera::PhotoCamera;
pub use display::LatchDisplay;
