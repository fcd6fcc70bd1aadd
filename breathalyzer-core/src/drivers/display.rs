//! 7-segment display behind a BCD latch
//!
//! Each of the four digits has its own latch with a BCD-to-7-segment decoder.
//! One digit is written per strobe pulse:
//! ```text
//! strobe high -> D3..D0 = digit (BCD), A1..A0 = position -> strobe low (latch)
//! ```
//! Position 0 is the rightmost digit.

use embedded_hal::digital::{OutputPin, PinState};

use crate::conversion::digits;
use crate::hardware::NumericDisplay;

/// Width of the digit address bus
const ADDRESS_BITS: usize = 2;

/// Width of the BCD data bus
const DATA_BITS: usize = 4;

/// Four digit latch display
pub struct LatchDisplay<P> {
    data: [P; DATA_BITS],
    address: [P; ADDRESS_BITS],
    strobe: P,
}

impl<P: OutputPin> LatchDisplay<P> {
    /// `data` is D0..D3, `address` is A0..A1
    pub fn new(data: [P; DATA_BITS], address: [P; ADDRESS_BITS], mut strobe: P) -> Self {
        let _ = strobe.set_low();
        Self {
            data,
            address,
            strobe,
        }
    }

    fn latch(&mut self, position: usize, digit: u8) {
        let _ = self.strobe.set_high();
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let _ = pin.set_state(PinState::from(digit & (1 << bit) != 0));
        }
        for (bit, pin) in self.address.iter_mut().enumerate() {
            let _ = pin.set_state(PinState::from(position & (1 << bit) != 0));
        }
        let _ = self.strobe.set_low();
    }
}

impl<P: OutputPin> NumericDisplay for LatchDisplay<P> {
    fn render(&mut self, value: u16) {
        for (position, digit) in digits(value).into_iter().enumerate() {
            self.latch(position, digit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::cell::RefCell;

    /// Port word as the latches see it, plus every word latched on a strobe
    #[derive(Default)]
    struct Bus {
        word: u8,
        strobe: bool,
        latched: Vec<u8>,
    }

    enum Line {
        /// Bit of the port word: D0..D3 are 0..3, A0..A1 are 4..5
        Bit(u8),
        Strobe,
    }

    struct Pin<'a> {
        bus: &'a RefCell<Bus>,
        line: Line,
    }

    impl ErrorType for Pin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for Pin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            let mut bus = self.bus.borrow_mut();
            match self.line {
                Line::Bit(n) => bus.word &= !(1 << n),
                Line::Strobe => {
                    if bus.strobe {
                        let word = bus.word;
                        bus.latched.push(word);
                    }
                    bus.strobe = false;
                }
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            let mut bus = self.bus.borrow_mut();
            match self.line {
                Line::Bit(n) => bus.word |= 1 << n,
                Line::Strobe => bus.strobe = true,
            }
            Ok(())
        }
    }

    fn display(bus: &RefCell<Bus>) -> LatchDisplay<Pin<'_>> {
        let pin = |line| Pin { bus, line };
        LatchDisplay::new(
            [
                pin(Line::Bit(0)),
                pin(Line::Bit(1)),
                pin(Line::Bit(2)),
                pin(Line::Bit(3)),
            ],
            [pin(Line::Bit(4)), pin(Line::Bit(5))],
            pin(Line::Strobe),
        )
    }

    #[test]
    fn writes_each_digit_to_its_position() {
        let bus = RefCell::new(Bus::default());
        display(&bus).render(1234);
        // digit + 16 * position
        assert_eq!(bus.borrow().latched, vec![4, 16 + 3, 32 + 2, 48 + 1]);
    }

    #[test]
    fn drops_digits_above_the_fourth() {
        let bus = RefCell::new(Bus::default());
        display(&bus).render(12345);
        assert_eq!(bus.borrow().latched, vec![5, 16 + 4, 32 + 3, 48 + 2]);
    }

    #[test]
    fn zero_shows_four_zeros() {
        let bus = RefCell::new(Bus::default());
        display(&bus).render(0);
        assert_eq!(bus.borrow().latched, vec![0, 16, 32, 48]);
    }
}
