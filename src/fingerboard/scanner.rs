//! The multiplex scan state machine.
//!
//! Each [`tick`](Scanner::tick) advances one step through the flattened
//! (fret, string, sub-slot) enumeration and drives at most two line
//! transitions, so a tick is a small constant amount of work. The state
//! machine alone decides what the lines do; the shared buffer and duty
//! cycle are read-only inputs, which is what makes the whole thing
//! testable off-hardware against a recording [`FingerLines`] double.

use crate::fingerboard::lines::FingerLines;
use crate::fingerboard::{DUTY_CYCLE_LIMIT, DutyCycleControl, FingerboardBuffer};

/// Position within the scan: owned exclusively by the scan task, never
/// touched by foreground code.
#[derive(Clone, Copy, Debug, Default)]
struct ScanCursor {
    fret: usize,
    string: usize,
    duty_count: u8,
    last_string_was_on: bool,
}

/// The scanner: cursor state plus the lines it drives.
///
/// Invariants, maintained by [`tick`](Self::tick):
///
/// - at most one fret line and at most one string line are asserted at
///   any instant;
/// - a fret line is only switched while no string line is asserted, so a
///   mid-switch LED can never glow on the wrong fret (ghosting);
/// - every (fret, string) pair is visited exactly `DUTY_CYCLE_LIMIT`
///   times per full sweep, and an LED whose buffer bit is set is lit for
///   exactly `duty_cycle` of those sub-slots.
pub struct Scanner<'a, const FRETS: usize, const STRINGS: usize, L> {
    lines: L,
    buffer: &'a FingerboardBuffer<FRETS>,
    duty_cycle: &'a DutyCycleControl,
    cursor: ScanCursor,
}

impl<'a, const FRETS: usize, const STRINGS: usize, L> Scanner<'a, FRETS, STRINGS, L>
where
    L: FingerLines<FRETS, STRINGS>,
{
    /// Bind the scanner to its lines and shared inputs, starting from the
    /// all-off state.
    pub fn new(
        mut lines: L,
        buffer: &'a FingerboardBuffer<FRETS>,
        duty_cycle: &'a DutyCycleControl,
    ) -> Self {
        lines.release_all();
        Self {
            lines,
            buffer,
            duty_cycle,
            cursor: ScanCursor::default(),
        }
    }

    /// Advance one (fret, string, sub-slot) step.
    ///
    /// Runs on every timer tick. Kept branch-light; on the original
    /// hardware the line writes dominated the tick budget, so there is at
    /// most one string-off, one fret switch, and one string-on per call.
    pub fn tick(&mut self) {
        // If the last sub-slot lit an LED, darken it before anything else
        // moves. The next sub-slot may select a different string on the
        // same fret.
        if self.cursor.last_string_was_on {
            self.lines.set_string(self.cursor.string, false);
        }

        // Bump the sub-slot counter and wrap if needed.
        self.cursor.duty_count = self.cursor.duty_count.wrapping_add(1);
        if self.cursor.duty_count >= DUTY_CYCLE_LIMIT {
            self.cursor.duty_count = 0;
        }

        // A wrap means the sub-slot cycle for this (fret, string) pair is
        // complete: move to the next string, and past the last string to
        // the next fret. The old fret line is released while the string
        // line is still off.
        if self.cursor.duty_count == 0 {
            let next_string = self.cursor.string.wrapping_add(1);
            if next_string >= STRINGS {
                self.cursor.string = 0;
                self.lines.set_fret(self.cursor.fret, false);
                let next_fret = self.cursor.fret.wrapping_add(1);
                self.cursor.fret = if next_fret >= FRETS { 0 } else { next_fret };
                self.lines.set_fret(self.cursor.fret, true);
            } else {
                self.cursor.string = next_string;
            }
        }

        // Within the duty window and painted on? Light it.
        let pattern = self.buffer.load(self.cursor.fret);
        let painted = pattern & (1u8 << self.cursor.string) != 0;
        if self.cursor.duty_count < self.duty_cycle.get() && painted {
            self.lines.set_string(self.cursor.string, true);
            self.cursor.last_string_was_on = true;
        } else {
            self.cursor.last_string_was_on = false;
        }
    }
}
