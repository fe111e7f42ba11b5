//! The output lines behind the fingerboard grid.
//!
//! The scanner only ever speaks in terms of "assert/release fret line n"
//! and "assert/release string line n"; which electrical level that means
//! is a per-line property. On the original chord chart hardware the fret
//! lines source the LED rows (active-high) while the string lines sink
//! the columns (active-low) — [`Polarity`] captures that so the scan
//! state machine never hardcodes HIGH/LOW.

/// Electrical polarity of one output line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Polarity {
    /// The line is asserted by driving it high.
    ActiveHigh,
    /// The line is asserted by driving it low.
    ActiveLow,
}

/// The line-driving seam the scanner works against.
///
/// `asserted` is the logical state; implementations apply polarity. The
/// scanner guarantees it asserts at most one fret line and at most one
/// string line at a time, and always releases a string line before
/// switching fret lines.
pub trait FingerLines<const FRETS: usize, const STRINGS: usize> {
    /// Assert or release the output line for `fret`.
    fn set_fret(&mut self, fret: usize, asserted: bool);

    /// Assert or release the output line for `string`.
    fn set_string(&mut self, string: usize, asserted: bool);

    /// Release every line (all LEDs off). Strings first, so no fret line
    /// switches while a string line is still asserted.
    fn release_all(&mut self) {
        for string in 0..STRINGS {
            self.set_string(string, false);
        }
        for fret in 0..FRETS {
            self.set_fret(fret, false);
        }
    }
}

#[cfg(not(feature = "host"))]
mod gpio {
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Level, Output};

    use super::{FingerLines, Polarity};

    impl Polarity {
        const fn level(self, asserted: bool) -> Level {
            match (self, asserted) {
                (Self::ActiveHigh, true) | (Self::ActiveLow, false) => Level::High,
                (Self::ActiveHigh, false) | (Self::ActiveLow, true) => Level::Low,
            }
        }
    }

    /// One physical output line paired with its polarity.
    pub struct Line<'a> {
        output: Output<'a>,
        polarity: Polarity,
    }

    impl<'a> Line<'a> {
        /// Configure `pin` as a digital output in the released state.
        #[must_use]
        pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, polarity: Polarity) -> Self {
            Self {
                output: Output::new(pin, polarity.level(false)),
                polarity,
            }
        }

        fn set(&mut self, asserted: bool) {
            self.output.set_level(self.polarity.level(asserted));
        }
    }

    /// GPIO-backed fret and string lines.
    ///
    /// Construction leaves every line released, which satisfies the scan
    /// task's starting assumption that the whole board is dark.
    pub struct GpioLines<'a, const FRETS: usize, const STRINGS: usize> {
        frets: [Line<'a>; FRETS],
        strings: [Line<'a>; STRINGS],
    }

    impl<'a, const FRETS: usize, const STRINGS: usize> GpioLines<'a, FRETS, STRINGS> {
        /// Bundle the fret and string lines, indexed by logical position
        /// (fret 0 nearest the nut; string 0 = high E).
        #[must_use]
        pub fn new(frets: [Line<'a>; FRETS], strings: [Line<'a>; STRINGS]) -> Self {
            Self { frets, strings }
        }
    }

    impl<const FRETS: usize, const STRINGS: usize> FingerLines<FRETS, STRINGS>
        for GpioLines<'_, FRETS, STRINGS>
    {
        fn set_fret(&mut self, fret: usize, asserted: bool) {
            self.frets[fret].set(asserted);
        }

        fn set_string(&mut self, string: usize, asserted: bool) {
            self.strings[string].set(asserted);
        }
    }
}

#[cfg(not(feature = "host"))]
pub use gpio::{GpioLines, Line};
