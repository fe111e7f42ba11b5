//! Text composition for the 16×2 character LCD.
//!
//! Pure formatting into fixed-capacity lines; pushing the text to actual
//! LCD hardware is the application's business. Layouts:
//!
//! ```text
//! Chord screen:        Brightness screen:     Powerup banner:
//! ┌────────────────┐   ┌────────────────┐     ┌────────────────┐
//! │Bb  V:1  Fret:1 │   │LED Brightness: │     │ Chord-O-Matic  │
//! │6th             │   │      100%      │     │V0.1.0          │
//! └────────────────┘   └────────────────┘     └────────────────┘
//! ```

use core::fmt::Write as _;

use heapless::String;

use crate::chords::ChordCursor;
use crate::{Error, Result};

/// LCD width in characters.
pub const SCREEN_COLS: usize = 16;

/// LCD height in rows.
pub const SCREEN_ROWS: usize = 2;

/// One LCD row of text.
pub type ScreenLine = String<SCREEN_COLS>;

/// A full screen, top row first.
pub type ScreenText = [ScreenLine; SCREEN_ROWS];

/// Compose the chord screen for the cursor's current chord.
///
/// The top row shows key, variation (1-based), and starting fret; the
/// bottom row shows the chord type, long form when `verbose`.
///
/// # Errors
///
/// [`Error::FormatError`] if a field does not fit the line.
pub fn chord_screen(cursor: &ChordCursor, verbose: bool) -> Result<ScreenText> {
    let mut top = ScreenLine::new();
    write!(
        top,
        "{:<4}V:{}  Fret:{}",
        cursor.key().name(),
        cursor.variation().wrapping_add(1),
        cursor.chord().first_fret()
    )
    .map_err(|_| Error::FormatError)?;

    let mut bottom = ScreenLine::new();
    let type_name = if verbose {
        cursor.chord_type().long_name()
    } else {
        cursor.chord_type().short_name()
    };
    bottom.push_str(type_name).map_err(|()| Error::FormatError)?;

    Ok([top, bottom])
}

/// Compose the brightness menu screen for a duty cycle in `1..=10`.
///
/// # Errors
///
/// [`Error::FormatError`] if the level does not fit the line.
pub fn brightness_screen(duty_cycle: u8) -> Result<ScreenText> {
    let mut top = ScreenLine::new();
    top.push_str("LED Brightness:")
        .map_err(|()| Error::FormatError)?;

    let mut bottom = ScreenLine::new();
    let percent = u16::from(duty_cycle).saturating_mul(10);
    write!(bottom, "      {percent}%").map_err(|_| Error::FormatError)?;

    Ok([top, bottom])
}

/// Compose the powerup banner.
///
/// # Errors
///
/// [`Error::FormatError`] if the version string does not fit the line.
pub fn powerup_screen() -> Result<ScreenText> {
    let mut top = ScreenLine::new();
    top.push_str(" Chord-O-Matic")
        .map_err(|()| Error::FormatError)?;

    let mut bottom = ScreenLine::new();
    write!(bottom, "V{}", env!("CARGO_PKG_VERSION")).map_err(|_| Error::FormatError)?;

    Ok([top, bottom])
}
