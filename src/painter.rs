//! Painting chords and test patterns onto the fingerboard.
//!
//! This is the foreground side of the display: it turns a [`Chord`] into
//! a full frame of string bit patterns and hands the frame to the
//! [`Fingerboard`] handle. The scan task never knows chords exist.

use serde::{Deserialize, Serialize};

use crate::chords::{Chord, NUM_CHORD_FRETS, STRING_BITS};
use crate::fingerboard::Fingerboard;

/// How strings that are not played in a chord are shown on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format, Serialize, Deserialize)]
pub enum UnplayedOption {
    /// Light the unplayed strings on every fret.
    LightAllFrets,
    /// Light the unplayed strings on the last (otherwise unused) fret.
    LightLastFretUnplayed,
    /// Light the *played* strings on the last fret instead.
    LightLastFretPlayed,
    /// Leave unplayed strings unmarked.
    Ignore,
}

impl UnplayedOption {
    /// All options, in settings-menu order.
    pub const ALL: [Self; 4] = [
        Self::LightAllFrets,
        Self::LightLastFretUnplayed,
        Self::LightLastFretPlayed,
        Self::Ignore,
    ];
}

impl Default for UnplayedOption {
    fn default() -> Self {
        Self::LightLastFretUnplayed
    }
}

/// A full frame in fingerboard layout: one byte per fret, LSB = high E.
pub type ChordFrame = [u8; NUM_CHORD_FRETS];

/// Build the frame for a chord with the unplayed-string marking applied.
///
/// Pure; exposed separately from [`ChordPainter`] so mode logic can
/// preview a frame without touching the display.
#[must_use]
pub fn chord_frame(chord: &Chord, unplayed: UnplayedOption) -> ChordFrame {
    let mut frame = *chord.pattern();
    match unplayed {
        UnplayedOption::LightAllFrets => {
            for strings in &mut frame {
                *strings |= chord.unplayed();
            }
        }
        UnplayedOption::LightLastFretUnplayed => {
            frame[NUM_CHORD_FRETS - 1] |= chord.unplayed();
        }
        UnplayedOption::LightLastFretPlayed => {
            frame[NUM_CHORD_FRETS - 1] |= !chord.unplayed() & STRING_BITS;
        }
        UnplayedOption::Ignore => {}
    }
    frame
}

/// Paints chords and test patterns through a [`Fingerboard`] handle.
pub struct ChordPainter<const STRINGS: usize> {
    fingerboard: Fingerboard<NUM_CHORD_FRETS, STRINGS>,
    unplayed: UnplayedOption,
}

impl<const STRINGS: usize> ChordPainter<STRINGS> {
    /// Wrap a fingerboard handle with the default unplayed-string option.
    #[must_use]
    pub fn new(fingerboard: Fingerboard<NUM_CHORD_FRETS, STRINGS>) -> Self {
        Self {
            fingerboard,
            unplayed: UnplayedOption::default(),
        }
    }

    /// Current unplayed-string option.
    #[must_use]
    pub fn unplayed_option(&self) -> UnplayedOption {
        self.unplayed
    }

    /// Change how unplayed strings are marked. Affects the next paint,
    /// not the frame already on the board.
    pub fn set_unplayed_option(&mut self, unplayed: UnplayedOption) {
        self.unplayed = unplayed;
    }

    /// Show a chord on the board.
    pub fn paint_chord(&self, chord: &Chord) {
        let frame = chord_frame(chord, self.unplayed);
        self.fingerboard.write_pattern(&frame);
    }

    /// Set every LED on or off.
    pub fn set_all(&self, lit: bool) {
        self.fingerboard.set_all(lit);
    }

    /// Apply one lamp-test step (toggle one LED).
    pub fn lamp_test_step(&self, step: (usize, usize)) {
        let (fret, string) = step;
        self.fingerboard.toggle_led(fret, string);
    }
}

/// Number of full board passes the powerup lamp test makes. Even, so the
/// board ends dark.
pub const LAMP_TEST_PASSES: usize = 2;

/// Suggested pacing between lamp-test steps.
pub const LAMP_TEST_STEP_MILLIS: u64 = 120;

/// The powerup lamp-test sequence: which LED to toggle at each step.
///
/// Walks the board string-major — every string of fret 0, then fret 1,
/// and so on — for a fixed number of passes. The first pass lights LEDs
/// one by one; the second darkens them in the same order, giving a
/// marching sweep that proves out every LED. Pace the steps yourself
/// (see [`LAMP_TEST_STEP_MILLIS`]).
#[derive(Clone, Copy, Debug)]
pub struct LampTest<const FRETS: usize, const STRINGS: usize> {
    fret: usize,
    string: usize,
    remaining: usize,
}

impl<const FRETS: usize, const STRINGS: usize> LampTest<FRETS, STRINGS> {
    /// A lamp test of `passes` full board sweeps.
    #[must_use]
    pub fn new(passes: usize) -> Self {
        Self {
            fret: 0,
            string: 0,
            remaining: passes.saturating_mul(FRETS).saturating_mul(STRINGS),
        }
    }
}

impl<const FRETS: usize, const STRINGS: usize> Default for LampTest<FRETS, STRINGS> {
    fn default() -> Self {
        Self::new(LAMP_TEST_PASSES)
    }
}

impl<const FRETS: usize, const STRINGS: usize> Iterator for LampTest<FRETS, STRINGS> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining = self.remaining.wrapping_sub(1);
        let step = (self.fret, self.string);
        let next_string = self.string.wrapping_add(1);
        if next_string >= STRINGS {
            self.string = 0;
            let next_fret = self.fret.wrapping_add(1);
            self.fret = if next_fret >= FRETS { 0 } else { next_fret };
        } else {
            self.string = next_string;
        }
        Some(step)
    }
}
