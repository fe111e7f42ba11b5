//! The chord chart: every chord the appliance can display, plus a cursor
//! for stepping through it.
//!
//! The table holds 12 keys × 8 chord types × 2 variations. Each entry
//! records the starting fret, a bit mask of strings that are not played,
//! and the fingering pattern itself — one byte per displayed fret, one
//! bit per string, LSB = high E. The pattern bytes use the same layout as
//! the fingerboard buffer, so painting a chord is a mask-and-copy (see
//! [`crate::painter`]).
//!
//! Fingering data follows the Wayne Chase "Complete Guitar Chord Poster"
//! (free edition, <https://www.howmusicreallyworks.com>), normalized so the
//! first displayed fret always contains at least one finger position.

/// Number of keys in the chart.
pub const NUM_KEYS: usize = 12;

/// Number of chord types per key.
pub const NUM_CHORD_TYPES: usize = 8;

/// Number of variations per chord type.
pub const NUM_VARIATIONS: usize = 2;

/// Number of frets a chord fingering spans.
pub const NUM_CHORD_FRETS: usize = 5;

/// Number of strings a chord pattern covers.
pub const NUM_CHORD_STRINGS: usize = 6;

/// Bit mask of all six string bits.
pub const STRING_BITS: u8 = (1 << NUM_CHORD_STRINGS) - 1;

/// Musical key, in chart order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
#[allow(missing_docs, reason = "variants are the note names")]
pub enum Key {
    C,
    CSharp,
    D,
    EFlat,
    E,
    F,
    FSharp,
    G,
    AFlat,
    A,
    BFlat,
    B,
}

impl Key {
    /// All keys in chart order.
    pub const ALL: [Self; NUM_KEYS] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::EFlat,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::AFlat,
        Self::A,
        Self::BFlat,
        Self::B,
    ];

    /// Position of this key in chart order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name (ASCII accidentals).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::EFlat => "Eb",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::AFlat => "Ab",
            Self::A => "A",
            Self::BFlat => "Bb",
            Self::B => "B",
        }
    }
}

/// Chord type, in chart order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum ChordType {
    /// Major triad.
    Major,
    /// Minor triad.
    Minor,
    /// Major sixth.
    Sixth,
    /// Minor sixth.
    MinorSixth,
    /// Dominant seventh.
    Seventh,
    /// Major seventh.
    MajorSeventh,
    /// Minor seventh.
    MinorSeventh,
    /// Dominant ninth.
    Ninth,
}

impl ChordType {
    /// All chord types in chart order.
    pub const ALL: [Self; NUM_CHORD_TYPES] = [
        Self::Major,
        Self::Minor,
        Self::Sixth,
        Self::MinorSixth,
        Self::Seventh,
        Self::MajorSeventh,
        Self::MinorSeventh,
        Self::Ninth,
    ];

    /// Position of this type in chart order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Full name, for the verbose chord screen.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Sixth => "6th",
            Self::MinorSixth => "Minor 6th",
            Self::Seventh => "7th",
            Self::MajorSeventh => "Major 7th",
            Self::MinorSeventh => "Minor 7th",
            Self::Ninth => "9th",
        }
    }

    /// Suffix notation, for the terse chord screen.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Sixth => "6",
            Self::MinorSixth => "m6",
            Self::Seventh => "7",
            Self::MajorSeventh => "M7",
            Self::MinorSeventh => "m7",
            Self::Ninth => "9",
        }
    }
}

/// One chord fingering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Chord {
    first_fret: u8,
    unplayed: u8,
    pattern: [u8; NUM_CHORD_FRETS],
}

impl Chord {
    /// Fret number the first pattern byte corresponds to (1-based).
    #[must_use]
    pub const fn first_fret(&self) -> u8 {
        self.first_fret
    }

    /// Bit mask of strings that are not played in this chord.
    #[must_use]
    pub const fn unplayed(&self) -> u8 {
        self.unplayed
    }

    /// Fingering pattern, one byte per displayed fret (LSB = high E).
    #[must_use]
    pub const fn pattern(&self) -> &[u8; NUM_CHORD_FRETS] {
        &self.pattern
    }
}

const fn chord(first_fret: u8, unplayed: u8, pattern: [u8; NUM_CHORD_FRETS]) -> Chord {
    Chord {
        first_fret,
        unplayed,
        pattern,
    }
}

/// The chart itself: `[key][chord type][variation]`.
static CHORD_TABLE: [[[Chord; NUM_VARIATIONS]; NUM_CHORD_TYPES]; NUM_KEYS] = [
    // C
    [
        [chord(1, 0x00, [0x02, 0x08, 0x30, 0x00, 0x00]), chord(3, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00])],
        [chord(1, 0x30, [0x0a, 0x00, 0x01, 0x00, 0x00]), chord(3, 0x00, [0x31, 0x02, 0x0c, 0x00, 0x00])],
        [chord(1, 0x00, [0x02, 0x0c, 0x01, 0x00, 0x00]), chord(5, 0x00, [0x0f, 0x00, 0x10, 0x20, 0x00])],
        [chord(1, 0x20, [0x0a, 0x00, 0x01, 0x00, 0x00]), chord(4, 0x30, [0x02, 0x0d, 0x00, 0x00, 0x00])],
        [chord(1, 0x00, [0x02, 0x08, 0x34, 0x00, 0x00]), chord(3, 0x00, [0x35, 0x00, 0x0a, 0x00, 0x00])],
        [chord(2, 0x00, [0x08, 0x30, 0x00, 0x00, 0x00]), chord(3, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00])],
        [chord(1, 0x20, [0x0a, 0x00, 0x15, 0x00, 0x00]), chord(3, 0x00, [0x35, 0x02, 0x08, 0x00, 0x00])],
        [chord(2, 0x00, [0x08, 0x37, 0x00, 0x00, 0x00]), chord(5, 0x20, [0x1e, 0x01, 0x00, 0x00, 0x00])],
    ],
    // C#
    [
        [chord(1, 0x00, [0x25, 0x02, 0x08, 0x10, 0x00]), chord(4, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00])],
        [chord(1, 0x30, [0x04, 0x0a, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x31, 0x02, 0x0c, 0x00, 0x00])],
        [chord(1, 0x00, [0x34, 0x02, 0x08, 0x01, 0x00]), chord(6, 0x00, [0x0f, 0x00, 0x10, 0x20, 0x00])],
        [chord(1, 0x20, [0x14, 0x0a, 0x00, 0x00, 0x00]), chord(2, 0x20, [0x0a, 0x04, 0x11, 0x00, 0x00])],
        [chord(2, 0x30, [0x02, 0x08, 0x05, 0x00, 0x00]), chord(4, 0x00, [0x35, 0x00, 0x0a, 0x00, 0x00])],
        [chord(1, 0x00, [0x27, 0x00, 0x08, 0x10, 0x00]), chord(4, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00])],
        [chord(1, 0x20, [0x04, 0x08, 0x00, 0x10, 0x00]), chord(2, 0x20, [0x0a, 0x00, 0x15, 0x00, 0x00])],
        [chord(3, 0x00, [0x08, 0x37, 0x00, 0x00, 0x00]), chord(6, 0x20, [0x1e, 0x01, 0x00, 0x00, 0x00])],
    ],
    // D
    [
        [chord(2, 0x00, [0x25, 0x02, 0x00, 0x00, 0x00]), chord(5, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00])],
        [chord(1, 0x00, [0x21, 0x04, 0x02, 0x00, 0x00]), chord(5, 0x00, [0x31, 0x02, 0x0c, 0x00, 0x00])],
        [chord(2, 0x00, [0x25, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x34, 0x02, 0x08, 0x01, 0x00])],
        [chord(1, 0x00, [0x21, 0x04, 0x00, 0x00, 0x00]), chord(3, 0x20, [0x0a, 0x04, 0x11, 0x00, 0x00])],
        [chord(1, 0x00, [0x02, 0x25, 0x00, 0x00, 0x00]), chord(3, 0x30, [0x02, 0x08, 0x05, 0x00, 0x00])],
        [chord(2, 0x00, [0x27, 0x00, 0x00, 0x00, 0x00]), chord(5, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00])],
        [chord(1, 0x20, [0x03, 0x04, 0x00, 0x00, 0x00]), chord(3, 0x20, [0x0a, 0x00, 0x15, 0x00, 0x00])],
        [chord(1, 0x00, [0x02, 0x24, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x08, 0x37, 0x00, 0x00, 0x00])],
    ],
    // Eb
    [
        [chord(3, 0x00, [0x25, 0x02, 0x08, 0x10, 0x00]), chord(6, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00])],
        [chord(1, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00]), chord(2, 0x30, [0x01, 0x04, 0x0a, 0x00, 0x00])],
        [chord(1, 0x20, [0x1a, 0x00, 0x05, 0x00, 0x00]), chord(3, 0x00, [0x34, 0x02, 0x08, 0x01, 0x00])],
        [chord(1, 0x20, [0x1a, 0x01, 0x04, 0x00, 0x00]), chord(4, 0x20, [0x0a, 0x04, 0x11, 0x00, 0x00])],
        [chord(1, 0x20, [0x18, 0x02, 0x05, 0x00, 0x00]), chord(4, 0x30, [0x02, 0x08, 0x05, 0x00, 0x00])],
        [chord(3, 0x00, [0x27, 0x00, 0x08, 0x10, 0x00]), chord(6, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00])],
        [chord(1, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00]), chord(4, 0x20, [0x0a, 0x00, 0x15, 0x00, 0x00])],
        [chord(1, 0x20, [0x19, 0x02, 0x00, 0x00, 0x00]), chord(1, 0x00, [0x19, 0x02, 0x24, 0x00, 0x00])],
    ],
    // E
    [
        [chord(1, 0x00, [0x04, 0x18, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x25, 0x02, 0x08, 0x10, 0x00])],
        [chord(2, 0x00, [0x18, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00])],
        [chord(1, 0x00, [0x04, 0x1a, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x1a, 0x00, 0x05, 0x00, 0x00])],
        [chord(2, 0x00, [0x1a, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x20, [0x1a, 0x01, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x04, 0x18, 0x02, 0x00, 0x00]), chord(2, 0x00, [0x18, 0x02, 0x05, 0x00, 0x00])],
        [chord(1, 0x00, [0x0c, 0x10, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x27, 0x00, 0x08, 0x10, 0x00])],
        [chord(2, 0x00, [0x10, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x04, 0x11, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x19, 0x02, 0x24, 0x00, 0x00])],
    ],
    // F
    [
        [chord(1, 0x00, [0x23, 0x04, 0x18, 0x00, 0x00]), chord(5, 0x00, [0x25, 0x02, 0x08, 0x10, 0x00])],
        [chord(1, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00]), chord(3, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00])],
        [chord(1, 0x00, [0x23, 0x04, 0x00, 0x00, 0x00]), chord(3, 0x20, [0x1a, 0x00, 0x05, 0x00, 0x00])],
        [chord(1, 0x30, [0x07, 0x00, 0x00, 0x00, 0x00]), chord(1, 0x00, [0x25, 0x00, 0x1a, 0x00, 0x00])],
        [chord(1, 0x00, [0x29, 0x04, 0x10, 0x02, 0x00]), chord(3, 0x20, [0x18, 0x02, 0x05, 0x00, 0x00])],
        [chord(1, 0x00, [0x22, 0x04, 0x18, 0x00, 0x00]), chord(5, 0x00, [0x27, 0x00, 0x08, 0x10, 0x00])],
        [chord(1, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00]), chord(3, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x2b, 0x00, 0x00, 0x00, 0x00]), chord(1, 0x00, [0x2a, 0x04, 0x11, 0x00, 0x00])],
    ],
    // F#
    [
        [chord(2, 0x00, [0x23, 0x04, 0x18, 0x00, 0x00]), chord(6, 0x00, [0x25, 0x02, 0x08, 0x10, 0x00])],
        [chord(2, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00]), chord(4, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00])],
        [chord(1, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00]), chord(4, 0x20, [0x1a, 0x00, 0x05, 0x00, 0x00])],
        [chord(1, 0x00, [0x08, 0x27, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x25, 0x00, 0x1a, 0x00, 0x00])],
        [chord(2, 0x00, [0x22, 0x04, 0x18, 0x00, 0x00]), chord(2, 0x00, [0x29, 0x04, 0x10, 0x02, 0x00])],
        [chord(1, 0x20, [0x11, 0x02, 0x04, 0x08, 0x00]), chord(2, 0x00, [0x23, 0x0c, 0x10, 0x00, 0x00])],
        [chord(2, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00]), chord(4, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x20, [0x14, 0x0b, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x2a, 0x04, 0x11, 0x00, 0x00])],
    ],
    // G
    [
        [chord(2, 0x00, [0x10, 0x21, 0x00, 0x00, 0x00]), chord(3, 0x00, [0x23, 0x04, 0x18, 0x00, 0x00])],
        [chord(3, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00]), chord(5, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00])],
        [chord(2, 0x00, [0x10, 0x20, 0x00, 0x00, 0x00]), chord(3, 0x00, [0x22, 0x04, 0x18, 0x00, 0x00])],
        [chord(1, 0x20, [0x10, 0x08, 0x02, 0x00, 0x00]), chord(2, 0x30, [0x08, 0x07, 0x00, 0x00, 0x00])],
        [chord(1, 0x00, [0x01, 0x10, 0x20, 0x00, 0x00]), chord(3, 0x00, [0x29, 0x04, 0x10, 0x02, 0x00])],
        [chord(2, 0x00, [0x11, 0x20, 0x00, 0x00, 0x00]), chord(2, 0x20, [0x11, 0x02, 0x04, 0x08, 0x00])],
        [chord(3, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00]), chord(5, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x01, 0x14, 0x20, 0x00, 0x00]), chord(2, 0x20, [0x14, 0x0b, 0x00, 0x00, 0x00])],
    ],
    // Ab
    [
        [chord(1, 0x00, [0x0e, 0x00, 0x10, 0x21, 0x00]), chord(4, 0x00, [0x23, 0x04, 0x18, 0x00, 0x00])],
        [chord(4, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00]), chord(6, 0x20, [0x18, 0x01, 0x04, 0x02, 0x00])],
        [chord(1, 0x00, [0x0f, 0x00, 0x10, 0x20, 0x00]), chord(3, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x2d, 0x10, 0x00, 0x00, 0x00]), chord(3, 0x30, [0x08, 0x07, 0x00, 0x00, 0x00])],
        [chord(1, 0x30, [0x0e, 0x01, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x29, 0x04, 0x10, 0x02, 0x00])],
        [chord(1, 0x20, [0x0e, 0x00, 0x11, 0x00, 0x00]), chord(3, 0x20, [0x11, 0x02, 0x04, 0x08, 0x00])],
        [chord(1, 0x30, [0x0c, 0x01, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00])],
        [chord(1, 0x20, [0x1e, 0x01, 0x00, 0x00, 0x00]), chord(3, 0x20, [0x14, 0x0b, 0x00, 0x00, 0x00])],
    ],
    // A
    [
        [chord(2, 0x00, [0x0e, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x0e, 0x00, 0x10, 0x21, 0x00])],
        [chord(1, 0x00, [0x02, 0x0c, 0x00, 0x00, 0x00]), chord(5, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00])],
        [chord(2, 0x00, [0x0f, 0x00, 0x00, 0x00, 0x00]), chord(4, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(1, 0x00, [0x02, 0x0d, 0x00, 0x00, 0x00]), chord(4, 0x20, [0x08, 0x07, 0x00, 0x00, 0x00])],
        [chord(2, 0x00, [0x0a, 0x00, 0x00, 0x00, 0x00]), chord(5, 0x00, [0x29, 0x04, 0x10, 0x02, 0x00])],
        [chord(1, 0x00, [0x04, 0x0a, 0x00, 0x00, 0x00]), chord(4, 0x20, [0x11, 0x02, 0x04, 0x08, 0x00])],
        [chord(1, 0x00, [0x02, 0x08, 0x00, 0x00, 0x00]), chord(5, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00])],
        [chord(2, 0x00, [0x0a, 0x01, 0x04, 0x00, 0x00]), chord(4, 0x20, [0x14, 0x0b, 0x00, 0x00, 0x00])],
    ],
    // Bb
    [
        [chord(1, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00]), chord(3, 0x00, [0x0e, 0x00, 0x10, 0x21, 0x00])],
        [chord(1, 0x00, [0x31, 0x02, 0x0c, 0x00, 0x00]), chord(6, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00])],
        [chord(3, 0x00, [0x0f, 0x00, 0x10, 0x20, 0x00]), chord(5, 0x20, [0x18, 0x03, 0x04, 0x00, 0x00])],
        [chord(2, 0x30, [0x02, 0x0d, 0x00, 0x00, 0x00]), chord(5, 0x30, [0x08, 0x07, 0x00, 0x00, 0x00])],
        [chord(1, 0x00, [0x35, 0x00, 0x0a, 0x00, 0x00]), chord(3, 0x30, [0x0e, 0x01, 0x00, 0x00, 0x00])],
        [chord(1, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00]), chord(3, 0x20, [0x0e, 0x00, 0x11, 0x00, 0x00])],
        [chord(1, 0x00, [0x35, 0x02, 0x08, 0x00, 0x00]), chord(6, 0x00, [0x2f, 0x00, 0x10, 0x00, 0x00])],
        [chord(1, 0x00, [0x37, 0x00, 0x00, 0x00, 0x00]), chord(3, 0x20, [0x1e, 0x01, 0x00, 0x00, 0x00])],
    ],
    // B
    [
        [chord(2, 0x00, [0x31, 0x00, 0x0e, 0x00, 0x00]), chord(4, 0x00, [0x0e, 0x00, 0x10, 0x21, 0x00])],
        [chord(2, 0x00, [0x31, 0x02, 0x0c, 0x00, 0x00]), chord(7, 0x00, [0x27, 0x00, 0x18, 0x00, 0x00])],
        [chord(1, 0x30, [0x0c, 0x01, 0x00, 0x00, 0x00]), chord(4, 0x00, [0x0f, 0x00, 0x10, 0x20, 0x00])],
        [chord(1, 0x00, [0x04, 0x31, 0x00, 0x00, 0x00]), chord(3, 0x30, [0x02, 0x0d, 0x00, 0x00, 0x00])],
        [chord(1, 0x00, [0x08, 0x35, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x35, 0x00, 0x0a, 0x00, 0x00])],
        [chord(2, 0x00, [0x31, 0x04, 0x0a, 0x00, 0x00]), chord(4, 0x20, [0x0e, 0x00, 0x11, 0x00, 0x00])],
        [chord(2, 0x00, [0x35, 0x00, 0x00, 0x00, 0x00]), chord(2, 0x00, [0x35, 0x02, 0x08, 0x00, 0x00])],
        [chord(1, 0x00, [0x08, 0x37, 0x00, 0x00, 0x00]), chord(4, 0x20, [0x1e, 0x01, 0x00, 0x00, 0x00])],
    ],
];

/// Look up one chord.
#[must_use]
pub fn chord_at(key: Key, chord_type: ChordType, variation: usize) -> &'static Chord {
    let variation = if variation >= NUM_VARIATIONS {
        NUM_VARIATIONS - 1
    } else {
        variation
    };
    &CHORD_TABLE[key.index()][chord_type.index()][variation]
}

/// A position in the chart: (key, chord type, variation).
///
/// `next_chord`/`previous_chord` walk the chart linearly — variation
/// first, then chord type, then key — and report `false` when asked to
/// step past either end. The key/type/variation steppers move one axis
/// and take a `wrap` flag: wrap around, or pin at the end.
#[derive(Clone, Copy, Debug)]
pub struct ChordCursor {
    key: Key,
    chord_type: ChordType,
    variation: usize,
}

impl Default for ChordCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordCursor {
    /// Cursor at the first chord of the chart (C Major, variation 1).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: Key::C,
            chord_type: ChordType::Major,
            variation: 0,
        }
    }

    /// Jump to a position. An out-of-range variation pins to the last.
    pub fn select(&mut self, key: Key, chord_type: ChordType, variation: usize) {
        self.key = key;
        self.chord_type = chord_type;
        self.variation = if variation >= NUM_VARIATIONS {
            NUM_VARIATIONS - 1
        } else {
            variation
        };
    }

    /// The chord at the cursor.
    #[must_use]
    pub fn chord(&self) -> &'static Chord {
        chord_at(self.key, self.chord_type, self.variation)
    }

    /// Current key.
    #[must_use]
    pub const fn key(&self) -> Key {
        self.key
    }

    /// Current chord type.
    #[must_use]
    pub const fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    /// Current variation (0-based).
    #[must_use]
    pub const fn variation(&self) -> usize {
        self.variation
    }

    /// Step to the next chord in chart order. Returns `false` (without
    /// moving) at the end of the chart.
    pub fn next_chord(&mut self) -> bool {
        let variation = self.variation.wrapping_add(1);
        if variation < NUM_VARIATIONS {
            self.variation = variation;
            return true;
        }
        let type_index = self.chord_type.index().wrapping_add(1);
        if type_index < NUM_CHORD_TYPES {
            self.chord_type = ChordType::ALL[type_index];
            self.variation = 0;
            return true;
        }
        let key_index = self.key.index().wrapping_add(1);
        if key_index < NUM_KEYS {
            self.key = Key::ALL[key_index];
            self.chord_type = ChordType::ALL[0];
            self.variation = 0;
            return true;
        }
        false
    }

    /// Step to the previous chord in chart order. Returns `false`
    /// (without moving) at the start of the chart.
    pub fn previous_chord(&mut self) -> bool {
        if self.variation > 0 {
            self.variation = self.variation.wrapping_sub(1);
            return true;
        }
        let type_index = self.chord_type.index();
        if type_index > 0 {
            self.chord_type = ChordType::ALL[type_index.wrapping_sub(1)];
            self.variation = NUM_VARIATIONS - 1;
            return true;
        }
        let key_index = self.key.index();
        if key_index > 0 {
            self.key = Key::ALL[key_index.wrapping_sub(1)];
            self.chord_type = ChordType::ALL[NUM_CHORD_TYPES - 1];
            self.variation = NUM_VARIATIONS - 1;
            return true;
        }
        false
    }

    /// Step to the next key, resetting the variation.
    pub fn next_key(&mut self, wrap: bool) {
        let next = self.key.index().wrapping_add(1);
        self.key = if next >= NUM_KEYS {
            if wrap { Key::ALL[0] } else { Key::ALL[NUM_KEYS - 1] }
        } else {
            Key::ALL[next]
        };
        self.variation = 0;
    }

    /// Step to the previous key, resetting the variation.
    pub fn previous_key(&mut self, wrap: bool) {
        let index = self.key.index();
        self.key = if index == 0 {
            if wrap { Key::ALL[NUM_KEYS - 1] } else { Key::ALL[0] }
        } else {
            Key::ALL[index.wrapping_sub(1)]
        };
        self.variation = 0;
    }

    /// Step to the next chord type, resetting the variation.
    pub fn next_type(&mut self, wrap: bool) {
        let next = self.chord_type.index().wrapping_add(1);
        self.chord_type = if next >= NUM_CHORD_TYPES {
            if wrap {
                ChordType::ALL[0]
            } else {
                ChordType::ALL[NUM_CHORD_TYPES - 1]
            }
        } else {
            ChordType::ALL[next]
        };
        self.variation = 0;
    }

    /// Step to the previous chord type, resetting the variation.
    pub fn previous_type(&mut self, wrap: bool) {
        let index = self.chord_type.index();
        self.chord_type = if index == 0 {
            if wrap {
                ChordType::ALL[NUM_CHORD_TYPES - 1]
            } else {
                ChordType::ALL[0]
            }
        } else {
            ChordType::ALL[index.wrapping_sub(1)]
        };
        self.variation = 0;
    }

    /// Step to the next variation.
    pub fn next_variation(&mut self, wrap: bool) {
        let next = self.variation.wrapping_add(1);
        self.variation = if next >= NUM_VARIATIONS {
            if wrap { 0 } else { NUM_VARIATIONS - 1 }
        } else {
            next
        };
    }

    /// Step to the previous variation.
    pub fn previous_variation(&mut self, wrap: bool) {
        self.variation = if self.variation == 0 {
            if wrap { NUM_VARIATIONS - 1 } else { 0 }
        } else {
            self.variation.wrapping_sub(1)
        };
    }
}
