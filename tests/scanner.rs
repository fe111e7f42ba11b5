#![allow(missing_docs)]
//! Host-level tests for the multiplex scan state machine.

use std::cell::RefCell;
use std::rc::Rc;

use fretboard_kit::fingerboard::{
    DUTY_CYCLE_LIMIT, FingerLines, Fingerboard, FingerboardStatic, Scanner, UPDATE_RATE_HZ,
    tick_period,
};

const FRETS: usize = 5;
const STRINGS: usize = 6;
const SUB_SLOTS: usize = DUTY_CYCLE_LIMIT as usize;
const TICKS_PER_SLOT: usize = SUB_SLOTS;
const TICKS_PER_FRET: usize = STRINGS * TICKS_PER_SLOT;
const TICKS_PER_SWEEP: usize = FRETS * TICKS_PER_FRET;

#[derive(Clone, Copy, Default)]
struct LineState {
    frets: [bool; FRETS],
    strings: [bool; STRINGS],
}

impl LineState {
    fn asserted_fret(&self) -> Option<usize> {
        self.frets.iter().position(|&asserted| asserted)
    }

    fn asserted_string(&self) -> Option<usize> {
        self.strings.iter().position(|&asserted| asserted)
    }
}

/// Recording test double for the line-driving seam. Checks the
/// electrical invariants on every transition:
///
/// - never two fret lines or two string lines asserted at once
/// - a fret line only switches while every string line is released
#[derive(Clone, Default)]
struct TraceLines(Rc<RefCell<LineState>>);

impl TraceLines {
    fn snapshot(&self) -> LineState {
        *self.0.borrow()
    }
}

impl FingerLines<FRETS, STRINGS> for TraceLines {
    fn set_fret(&mut self, fret: usize, asserted: bool) {
        let mut state = self.0.borrow_mut();
        assert!(
            state.strings.iter().all(|&string_on| !string_on),
            "fret line switched while a string line was asserted"
        );
        if asserted {
            assert!(
                state
                    .frets
                    .iter()
                    .enumerate()
                    .all(|(index, &fret_on)| !fret_on || index == fret),
                "two fret lines asserted at once"
            );
        }
        state.frets[fret] = asserted;
    }

    fn set_string(&mut self, string: usize, asserted: bool) {
        let mut state = self.0.borrow_mut();
        if asserted {
            assert!(
                state
                    .strings
                    .iter()
                    .enumerate()
                    .all(|(index, &string_on)| !string_on || index == string),
                "two string lines asserted at once"
            );
        }
        state.strings[string] = asserted;
    }
}

struct Harness {
    scanner: Scanner<'static, FRETS, STRINGS, TraceLines>,
    trace: TraceLines,
}

impl Harness {
    fn new(fingerboard_static: &'static FingerboardStatic<FRETS>) -> Self {
        let trace = TraceLines::default();
        let scanner = Scanner::new(
            trace.clone(),
            fingerboard_static.buffer(),
            fingerboard_static.duty_cycle(),
        );
        Self { scanner, trace }
    }

    fn tick(&mut self) -> LineState {
        self.scanner.tick();
        self.trace.snapshot()
    }

    /// Run past the cold start and stop right after a fret switch, so
    /// sampling windows align with fret blocks.
    fn warm_up(&mut self) {
        for _ in 0..TICKS_PER_SWEEP {
            self.tick();
        }
        let start = self.trace.snapshot().asserted_fret();
        for _ in 0..TICKS_PER_FRET {
            if self.tick().asserted_fret() != start {
                return;
            }
        }
        panic!("fret line never advanced");
    }
}

#[test]
fn fret_lines_assert_in_contiguous_blocks() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);
    fingerboard.set_all(true);

    let mut harness = Harness::new(&FB);
    harness.warm_up();

    // One full sweep, starting at a fret boundary: expect FRETS runs of
    // asserted-fret samples, each exactly one fret block long, visiting
    // every fret once.
    let mut samples = Vec::with_capacity(TICKS_PER_SWEEP);
    samples.push(harness.trace.snapshot().asserted_fret().expect("fret on"));
    for _ in 1..TICKS_PER_SWEEP {
        samples.push(harness.tick().asserted_fret().expect("fret on"));
    }

    let mut runs: Vec<(usize, usize)> = Vec::new(); // (fret, length)
    for &fret in &samples {
        match runs.last_mut() {
            Some((current, length)) if *current == fret => *length += 1,
            _ => runs.push((fret, 1)),
        }
    }
    assert_eq!(runs.len(), FRETS, "each fret asserted exactly once per sweep");
    for &(_, length) in &runs {
        assert_eq!(length, TICKS_PER_FRET);
    }
    let mut visited: Vec<usize> = runs.iter().map(|&(fret, _)| fret).collect();
    visited.sort_unstable();
    assert_eq!(visited, (0..FRETS).collect::<Vec<_>>());
}

#[test]
fn full_duty_single_led_follows_its_fret() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);
    // String 0 lit at fret 0, full brightness.
    fingerboard.write_pattern(&[0b00000001, 0, 0, 0, 0]);

    let mut harness = Harness::new(&FB);
    harness.warm_up();

    for _ in 0..2 * TICKS_PER_SWEEP {
        let state = harness.tick();
        match state.asserted_fret() {
            Some(0) => {
                // While fret 0 is selected, only string 0 may light, and at
                // full duty it is lit on every sub-slot of its slot.
                if let Some(string) = state.asserted_string() {
                    assert_eq!(string, 0);
                }
            }
            _ => assert_eq!(state.asserted_string(), None),
        }
    }

    // Count lit ticks across one aligned sweep: the single LED's slot is
    // lit for all of its sub-slots.
    let lit = (0..TICKS_PER_SWEEP)
        .filter(|_| harness.tick().asserted_string() == Some(0))
        .count();
    assert_eq!(lit, SUB_SLOTS);
}

#[test]
fn half_duty_lights_half_the_sub_slots() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, 5);
    fingerboard.write_pattern(&[0b00000001, 0, 0, 0, 0]);

    let mut harness = Harness::new(&FB);
    harness.warm_up();

    for sweep in 0..3 {
        let lit = (0..TICKS_PER_SWEEP)
            .filter(|_| harness.tick().asserted_string() == Some(0))
            .count();
        assert_eq!(lit, 5, "sweep {sweep}: 50% duty lights 5 of 10 sub-slots");
    }
}

#[test]
fn every_duty_level_is_proportional() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, 1);
    fingerboard.write_pattern(&[0, 0b00100000, 0, 0, 0]); // string 5, fret 1

    let mut harness = Harness::new(&FB);
    harness.warm_up();

    for duty in 1..=DUTY_CYCLE_LIMIT {
        fingerboard.set_duty_cycle(duty);
        // Settle one sweep so the new level covers a whole aligned sweep.
        for _ in 0..TICKS_PER_SWEEP {
            harness.tick();
        }
        let lit = (0..TICKS_PER_SWEEP)
            .filter(|_| harness.tick().asserted_string() == Some(5))
            .count();
        assert_eq!(lit, duty as usize, "duty {duty} lights {duty} sub-slots");
    }
}

#[test]
fn all_zero_buffer_never_asserts_a_string() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);
    fingerboard.clear();

    let mut harness = Harness::new(&FB);
    for _ in 0..3 * TICKS_PER_SWEEP {
        assert_eq!(harness.tick().asserted_string(), None);
    }
}

#[test]
fn buffer_writes_become_visible_within_one_sweep() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);

    let mut harness = Harness::new(&FB);
    harness.warm_up();

    // Paint mid-scan; the LED must light within the next full sweep.
    fingerboard.set_led(2, 3, true);
    let lit = (0..2 * TICKS_PER_SWEEP).any(|_| {
        let state = harness.tick();
        state.asserted_fret() == Some(2) && state.asserted_string() == Some(3)
    });
    assert!(lit, "a painted LED lights within a sweep");

    // And clearing darkens it again.
    fingerboard.set_led(2, 3, false);
    for _ in 0..TICKS_PER_SWEEP {
        harness.tick();
    }
    for _ in 0..TICKS_PER_SWEEP {
        assert_eq!(harness.tick().asserted_string(), None);
    }
}

#[test]
fn duty_cycle_set_clamps_and_returns_previous() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);

    assert_eq!(fingerboard.set_duty_cycle(0), DUTY_CYCLE_LIMIT);
    assert_eq!(fingerboard.duty_cycle(), 1, "0 clamps to the floor of 1");

    assert_eq!(fingerboard.set_duty_cycle(DUTY_CYCLE_LIMIT + 5), 1);
    assert_eq!(fingerboard.duty_cycle(), DUTY_CYCLE_LIMIT, "clamps to the limit");

    // Idempotent: setting the current value returns it and changes nothing.
    assert_eq!(fingerboard.set_duty_cycle(DUTY_CYCLE_LIMIT), DUTY_CYCLE_LIMIT);
    assert_eq!(fingerboard.duty_cycle(), DUTY_CYCLE_LIMIT);
}

#[test]
fn duty_cycle_steps_clamp_at_both_ends() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, 1);

    assert_eq!(fingerboard.decrement_duty_cycle(), 1, "1 is the floor");
    assert_eq!(fingerboard.increment_duty_cycle(), 2);
    assert_eq!(fingerboard.set_duty_cycle(DUTY_CYCLE_LIMIT), 2);
    assert_eq!(
        fingerboard.increment_duty_cycle(),
        DUTY_CYCLE_LIMIT,
        "the limit is the ceiling"
    );
}

#[test]
fn rebinding_the_scanner_resets_to_all_off() {
    static FB: FingerboardStatic<FRETS> = FingerboardStatic::new_static();
    let fingerboard = Fingerboard::<FRETS, STRINGS>::new(&FB, DUTY_CYCLE_LIMIT);
    fingerboard.set_all(true);

    let mut harness = Harness::new(&FB);
    harness.warm_up();
    assert!(harness.trace.snapshot().asserted_fret().is_some());

    // A fresh scanner over the same lines starts from everything released.
    let trace = harness.trace.clone();
    let _scanner = Scanner::<FRETS, STRINGS, _>::new(
        trace.clone(),
        FB.buffer(),
        FB.duty_cycle(),
    );
    let state = trace.snapshot();
    assert_eq!(state.asserted_fret(), None);
    assert_eq!(state.asserted_string(), None);
}

#[test]
fn tick_period_matches_the_sweep_budget() {
    // One sweep of ticks fits exactly into one update period.
    let period = tick_period(FRETS, STRINGS);
    assert_eq!(period.as_micros(), 55);
    let sweep_micros = period.as_micros() * TICKS_PER_SWEEP as u64;
    assert!(sweep_micros <= 1_000_000 / UPDATE_RATE_HZ);
    assert_eq!(
        Fingerboard::<FRETS, STRINGS>::tick_period(),
        period
    );
}
