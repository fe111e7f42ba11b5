#![allow(missing_docs)]
//! Host-level tests for the chord chart and its cursor.

use fretboard_kit::chords::{
    Chord, ChordCursor, ChordType, Key, NUM_CHORD_TYPES, NUM_KEYS, NUM_VARIATIONS, STRING_BITS,
    chord_at,
};

fn every_chord() -> impl Iterator<Item = &'static Chord> {
    Key::ALL.iter().flat_map(|&key| {
        ChordType::ALL.iter().flat_map(move |&chord_type| {
            (0..NUM_VARIATIONS).map(move |variation| chord_at(key, chord_type, variation))
        })
    })
}

#[test]
fn table_values_are_sane() {
    for chord in every_chord() {
        assert!(
            (1..=12).contains(&chord.first_fret()),
            "starting fret {} out of range",
            chord.first_fret()
        );
        assert_eq!(
            chord.unplayed() & !STRING_BITS,
            0,
            "unplayed mask uses only the six string bits"
        );
        for &strings in chord.pattern() {
            assert_eq!(
                strings & !STRING_BITS,
                0,
                "pattern byte uses only the six string bits"
            );
        }
    }
}

#[test]
fn known_entries_match_the_chart() {
    // C Major, first variation: open-position C.
    let c_major = chord_at(Key::C, ChordType::Major, 0);
    assert_eq!(c_major.first_fret(), 1);
    assert_eq!(c_major.unplayed(), 0x00);
    assert_eq!(c_major.pattern(), &[0x02, 0x08, 0x30, 0x00, 0x00]);

    // C Minor Sixth has two unplayed strings; the settings preview uses it.
    let c_m6 = chord_at(Key::C, ChordType::MinorSixth, 0);
    assert_eq!(c_m6.unplayed(), 0x20);

    // The very last chart entry: B Ninth, second variation.
    let b9 = chord_at(Key::B, ChordType::Ninth, 1);
    assert_eq!(b9.first_fret(), 4);
    assert_eq!(b9.unplayed(), 0x20);
    assert_eq!(b9.pattern(), &[0x1e, 0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn out_of_range_variation_pins_to_the_last() {
    assert_eq!(
        chord_at(Key::G, ChordType::Seventh, 99),
        chord_at(Key::G, ChordType::Seventh, NUM_VARIATIONS - 1)
    );
}

#[test]
fn cursor_starts_at_the_first_chord() {
    let cursor = ChordCursor::new();
    assert_eq!(cursor.key(), Key::C);
    assert_eq!(cursor.chord_type(), ChordType::Major);
    assert_eq!(cursor.variation(), 0);
}

#[test]
fn next_chord_walks_the_whole_chart_once() {
    let mut cursor = ChordCursor::new();
    let mut count = 1; // the starting chord
    while cursor.next_chord() {
        count += 1;
    }
    assert_eq!(count, NUM_KEYS * NUM_CHORD_TYPES * NUM_VARIATIONS);
    assert_eq!(cursor.key(), Key::B);
    assert_eq!(cursor.chord_type(), ChordType::Ninth);
    assert_eq!(cursor.variation(), NUM_VARIATIONS - 1);

    // Pinned at the end: another step reports failure and stays put.
    assert!(!cursor.next_chord());
    assert_eq!(cursor.key(), Key::B);
}

#[test]
fn previous_chord_is_the_inverse_of_next() {
    let mut cursor = ChordCursor::new();
    assert!(!cursor.previous_chord(), "already at the first chord");

    for _ in 0..37 {
        assert!(cursor.next_chord());
    }
    let there = (cursor.key(), cursor.chord_type(), cursor.variation());
    assert!(cursor.next_chord());
    assert!(cursor.previous_chord());
    assert_eq!((cursor.key(), cursor.chord_type(), cursor.variation()), there);
}

#[test]
fn chord_steps_carry_across_types_and_keys() {
    let mut cursor = ChordCursor::new();
    cursor.select(Key::C, ChordType::Ninth, NUM_VARIATIONS - 1);
    assert!(cursor.next_chord());
    assert_eq!(cursor.key(), Key::CSharp);
    assert_eq!(cursor.chord_type(), ChordType::Major);
    assert_eq!(cursor.variation(), 0);

    assert!(cursor.previous_chord());
    assert_eq!(cursor.key(), Key::C);
    assert_eq!(cursor.chord_type(), ChordType::Ninth);
    assert_eq!(cursor.variation(), NUM_VARIATIONS - 1);
}

#[test]
fn key_stepping_wraps_or_pins() {
    let mut cursor = ChordCursor::new();
    cursor.select(Key::B, ChordType::Minor, 1);

    cursor.next_key(false);
    assert_eq!(cursor.key(), Key::B, "pinned at the last key");
    assert_eq!(cursor.variation(), 0, "variation resets on key steps");
    assert_eq!(cursor.chord_type(), ChordType::Minor, "type is kept");

    cursor.next_key(true);
    assert_eq!(cursor.key(), Key::C, "wraps to the first key");

    cursor.previous_key(false);
    assert_eq!(cursor.key(), Key::C, "pinned at the first key");

    cursor.previous_key(true);
    assert_eq!(cursor.key(), Key::B, "wraps to the last key");
}

#[test]
fn type_stepping_wraps_or_pins() {
    let mut cursor = ChordCursor::new();
    cursor.select(Key::E, ChordType::Ninth, 1);

    cursor.next_type(false);
    assert_eq!(cursor.chord_type(), ChordType::Ninth);
    assert_eq!(cursor.variation(), 0);

    cursor.next_type(true);
    assert_eq!(cursor.chord_type(), ChordType::Major);

    cursor.previous_type(false);
    assert_eq!(cursor.chord_type(), ChordType::Major);

    cursor.previous_type(true);
    assert_eq!(cursor.chord_type(), ChordType::Ninth);
}

#[test]
fn variation_stepping_wraps_or_pins() {
    let mut cursor = ChordCursor::new();

    cursor.next_variation(false);
    assert_eq!(cursor.variation(), NUM_VARIATIONS - 1);
    cursor.next_variation(false);
    assert_eq!(cursor.variation(), NUM_VARIATIONS - 1);
    cursor.next_variation(true);
    assert_eq!(cursor.variation(), 0);

    cursor.previous_variation(false);
    assert_eq!(cursor.variation(), 0);
    cursor.previous_variation(true);
    assert_eq!(cursor.variation(), NUM_VARIATIONS - 1);
}

#[test]
fn names_cover_every_key_and_type() {
    for key in Key::ALL {
        assert!(!key.name().is_empty());
        assert!(key.name().len() <= 2);
    }
    for chord_type in ChordType::ALL {
        assert!(!chord_type.long_name().is_empty());
        // The Major suffix is empty by convention; all others are not.
        if chord_type != ChordType::Major {
            assert!(!chord_type.short_name().is_empty());
        }
    }
}
