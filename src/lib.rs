//! Device abstractions for a guitar chord chart appliance on Pico 1 and 2.
//!
//! The appliance is an LED fingerboard (a frets × strings grid of LEDs, one
//! output line per fret and one per string) plus a 16×2 character LCD,
//! driven by foreground mode logic and an infrared remote.
//!
//! The heart of the crate is the [`fingerboard`] module: a multiplexing
//! scan task that time-slices the LED grid across the output lines at a
//! fixed tick rate, with a global duty-cycle (brightness) control. The
//! surrounding modules supply the chord table ([`chords`]), the frame
//! painting helpers ([`painter`]), LCD text composition ([`screen`]), and
//! persistent settings ([`settings`]).
//!
//! # Glossary
//!
//! - **Fret line / string line:** one physical output per fret row and one
//!   per string column. Lighting the LED at (fret, string) means asserting
//!   both its fret line and its string line; the scan task ensures at most
//!   one of each is ever asserted at a time.
//! - **Duty cycle:** brightness in tenths. Each LED slot is divided into
//!   ten sub-slots; a duty cycle of `d` lights the LED during the first
//!   `d` of them.

#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

pub mod chords;
mod error;
pub mod fingerboard;
pub mod painter;
pub mod screen;
pub mod settings;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
