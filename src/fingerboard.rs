//! A device abstraction for a multiplexed LED fingerboard.
//!
//! The fingerboard is a frets × strings grid of LEDs wired with one output
//! line per fret and one per string; an LED lights when both its fret line
//! and its string line are asserted. Because the hardware can only drive
//! one fret line and one string line at a time, a background scan task
//! time-slices the grid: each tick it visits one (fret, string, sub-slot)
//! step, so every LED appears continuously lit at a brightness set by the
//! global duty cycle. See [`scanner`] for the state machine itself.
//!
//! Foreground code paints by writing string bit patterns (one byte per
//! fret) through the [`Fingerboard`] handle; the scan task reads the
//! shared buffer one byte per tick. The buffer is the only state shared
//! between the two contexts and the contract is single-writer /
//! single-reader with byte-granular atomicity: a byte read mid-update is
//! old or new, never torn. A multi-byte repaint may be observed across
//! two sweeps; at 60 sweeps per second that is not visible.
//!
//! # Example
//!
//! ```rust,ignore
//! use fretboard_kit::{
//!     Result, fingerboard_device,
//!     fingerboard::{Fingerboard, FingerboardStatic, GpioLines, Line, Polarity},
//! };
//!
//! // Generate a resources struct and the concrete scan task for a
//! // 5-fret, 6-string fingerboard.
//! fingerboard_device! {
//!     pub struct FingerboardResources,
//!     task: scan_task,
//!     frets: 5,
//!     strings: 6,
//! }
//!
//! async fn example(spawner: embassy_executor::Spawner) -> Result<()> {
//!     let p = embassy_rp::init(Default::default());
//!     static RESOURCES: FingerboardResources = FingerboardResources::new_static();
//!
//!     // Fret lines drive the LED anode rows (active-high); string lines
//!     // sink the cathode columns (active-low).
//!     let lines = GpioLines::new(
//!         [
//!             Line::new(p.PIN_2, Polarity::ActiveHigh),
//!             Line::new(p.PIN_3, Polarity::ActiveHigh),
//!             Line::new(p.PIN_4, Polarity::ActiveHigh),
//!             Line::new(p.PIN_5, Polarity::ActiveHigh),
//!             Line::new(p.PIN_6, Polarity::ActiveHigh),
//!         ],
//!         [
//!             Line::new(p.PIN_8, Polarity::ActiveLow),
//!             Line::new(p.PIN_9, Polarity::ActiveLow),
//!             Line::new(p.PIN_10, Polarity::ActiveLow),
//!             Line::new(p.PIN_11, Polarity::ActiveLow),
//!             Line::new(p.PIN_12, Polarity::ActiveLow),
//!             Line::new(p.PIN_13, Polarity::ActiveLow),
//!         ],
//!     );
//!
//!     // Spawns the scan task; the display is live from here on.
//!     let fingerboard = RESOURCES.new(lines, 10, spawner)?;
//!
//!     // Light string 0 at fret 0.
//!     fingerboard.set_led(0, 0, true);
//!     Ok(())
//! }
//! ```

pub mod lines;
pub mod scanner;

#[cfg(not(feature = "host"))]
pub use lines::{GpioLines, Line};
pub use lines::{FingerLines, Polarity};
pub use scanner::Scanner;

use embassy_time::Duration;
use portable_atomic::{AtomicU8, Ordering};

// ============================================================================
// Timing constants
// ============================================================================

/// Number of brightness sub-slots per LED slot.
///
/// The duty cycle ranges over `1..=DUTY_CYCLE_LIMIT`, so brightness moves
/// in steps of 10%.
pub const DUTY_CYCLE_LIMIT: u8 = 10;

/// Target full-grid sweeps per second. 60 keeps the display flicker-free.
pub const UPDATE_RATE_HZ: u64 = 60;

/// Scan tick period for a `frets` × `strings` fingerboard.
///
/// One tick handles one (fret, string, sub-slot) step, so a full sweep is
/// `frets × strings × DUTY_CYCLE_LIMIT` ticks and must complete within one
/// update period. For the 5×6 fingerboard this works out to 55 µs.
#[must_use]
pub const fn tick_period(frets: usize, strings: usize) -> Duration {
    let ticks_per_second =
        frets as u64 * strings as u64 * UPDATE_RATE_HZ * DUTY_CYCLE_LIMIT as u64;
    Duration::from_micros(1_000_000 / ticks_per_second)
}

// ============================================================================
// Duty cycle control
// ============================================================================

/// Global LED brightness as a duty cycle in `1..=DUTY_CYCLE_LIMIT`.
///
/// Foreground code sets the level; the scan task only ever reads it, so a
/// relaxed atomic is the whole synchronization story. Out-of-range
/// requests clamp silently; 1 is the floor everywhere (the display never
/// goes fully dark through brightness adjustment).
pub struct DutyCycleControl {
    level: AtomicU8,
}

impl DutyCycleControl {
    /// Duty cycle applied until the foreground sets one (full brightness).
    pub const DEFAULT: u8 = DUTY_CYCLE_LIMIT;

    #[must_use]
    pub(crate) const fn new_static() -> Self {
        Self {
            level: AtomicU8::new(Self::DEFAULT),
        }
    }

    const fn clamp(level: u8) -> u8 {
        if level < 1 {
            1
        } else if level > DUTY_CYCLE_LIMIT {
            DUTY_CYCLE_LIMIT
        } else {
            level
        }
    }

    /// Set the duty cycle, clamped into range. Returns the previous value.
    ///
    /// Takes effect on the very next scan tick.
    pub fn set(&self, level: u8) -> u8 {
        self.level.swap(Self::clamp(level), Ordering::Relaxed)
    }

    /// Step brightness up one level and return the new value.
    pub fn increment(&self) -> u8 {
        let new_level = Self::clamp(self.get().saturating_add(1));
        self.level.store(new_level, Ordering::Relaxed);
        new_level
    }

    /// Step brightness down one level and return the new value.
    pub fn decrement(&self) -> u8 {
        let new_level = Self::clamp(self.get().saturating_sub(1));
        self.level.store(new_level, Ordering::Relaxed);
        new_level
    }

    /// Current duty cycle.
    #[must_use]
    pub fn get(&self) -> u8 {
        self.level.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Shared fingerboard buffer
// ============================================================================

/// The shared frame buffer: one byte per fret, one bit per string.
///
/// Bit `b` of byte `f` means "string `b` is lit at fret `f`" (LSB = high
/// E). Foreground code stores whole bytes; the scan task loads one byte
/// per tick. There is deliberately no lock and no whole-frame atomicity:
/// byte-granular tearing during a repaint is bounded to one scan slot and
/// accepted.
pub struct FingerboardBuffer<const FRETS: usize> {
    frets: [AtomicU8; FRETS],
}

impl<const FRETS: usize> FingerboardBuffer<FRETS> {
    #[must_use]
    pub(crate) const fn new_static() -> Self {
        Self {
            frets: [const { AtomicU8::new(0) }; FRETS],
        }
    }

    /// String bit pattern at `fret`.
    #[must_use]
    pub fn load(&self, fret: usize) -> u8 {
        self.frets[fret].load(Ordering::Relaxed)
    }

    /// Replace the string bit pattern at `fret`.
    pub fn store(&self, fret: usize, strings: u8) {
        self.frets[fret].store(strings, Ordering::Relaxed);
    }

    /// Flip the strings in `mask` at `fret`.
    pub fn toggle(&self, fret: usize, mask: u8) {
        self.frets[fret].fetch_xor(mask, Ordering::Relaxed);
    }

    /// Blank the whole frame.
    pub fn clear(&self) {
        for fret in &self.frets {
            fret.store(0, Ordering::Relaxed);
        }
    }
}

// ============================================================================
// Static resources
// ============================================================================

/// Statics backing one fingerboard: the shared buffer and the duty cycle.
///
/// Usually created through the [`fingerboard_device!`](crate::fingerboard_device)
/// macro rather than directly.
pub struct FingerboardStatic<const FRETS: usize> {
    buffer: FingerboardBuffer<FRETS>,
    duty_cycle: DutyCycleControl,
}

impl<const FRETS: usize> FingerboardStatic<FRETS> {
    /// Create the statics for one fingerboard instance.
    #[must_use]
    pub const fn new_static() -> Self {
        Self {
            buffer: FingerboardBuffer::new_static(),
            duty_cycle: DutyCycleControl::new_static(),
        }
    }

    /// The shared frame buffer.
    #[must_use]
    pub fn buffer(&self) -> &FingerboardBuffer<FRETS> {
        &self.buffer
    }

    /// The shared duty cycle control.
    #[must_use]
    pub fn duty_cycle(&self) -> &DutyCycleControl {
        &self.duty_cycle
    }
}

// ============================================================================
// Fingerboard handle
// ============================================================================

/// Foreground handle for one fingerboard.
///
/// Cheap to copy; all methods write the shared buffer or the duty cycle
/// and return immediately. The scan task picks changes up within one
/// sweep. See the [module documentation](mod@crate::fingerboard) for the
/// sharing contract.
#[derive(Clone, Copy)]
pub struct Fingerboard<const FRETS: usize, const STRINGS: usize> {
    buffer: &'static FingerboardBuffer<FRETS>,
    duty_cycle: &'static DutyCycleControl,
}

impl<const FRETS: usize, const STRINGS: usize> Fingerboard<FRETS, STRINGS> {
    /// Bit mask covering all strings of one fret byte.
    pub const STRINGS_MASK: u8 = ((1u16 << STRINGS) - 1) as u8;

    /// Bind a handle to the statics, blank the display, and set the
    /// starting duty cycle.
    ///
    /// Called by macro-generated resource structs before the scan task is
    /// spawned, so the task's first tick sees a blank frame and the
    /// requested brightness.
    #[must_use]
    pub fn new(fingerboard_static: &'static FingerboardStatic<FRETS>, duty_cycle: u8) -> Self {
        assert!(FRETS >= 1, "fingerboard needs at least one fret");
        assert!(
            (1..=8).contains(&STRINGS),
            "string bits must fit one buffer byte"
        );
        let fingerboard = Self {
            buffer: &fingerboard_static.buffer,
            duty_cycle: &fingerboard_static.duty_cycle,
        };
        fingerboard.reinitialize(duty_cycle);
        fingerboard
    }

    /// Blank the display and set the duty cycle.
    ///
    /// Safe at any time; the scan cursor is owned by the scan task and
    /// re-converges on the blank frame within one sweep.
    pub fn reinitialize(&self, duty_cycle: u8) {
        self.buffer.clear();
        self.duty_cycle.set(duty_cycle);
    }

    /// Paint a whole frame, one byte per fret (LSB = high E).
    ///
    /// Bits beyond the last string are ignored.
    pub fn write_pattern(&self, pattern: &[u8; FRETS]) {
        for (fret, strings) in pattern.iter().enumerate() {
            self.buffer.store(fret, strings & Self::STRINGS_MASK);
        }
    }

    /// Set every LED on the board on or off.
    pub fn set_all(&self, lit: bool) {
        let strings = if lit { Self::STRINGS_MASK } else { 0 };
        for fret in 0..FRETS {
            self.buffer.store(fret, strings);
        }
    }

    /// Blank the display.
    pub fn clear(&self) {
        self.buffer.clear();
    }

    /// Set one LED on or off.
    pub fn set_led(&self, fret: usize, string: usize, lit: bool) {
        assert!(fret < FRETS, "fret out of range");
        assert!(string < STRINGS, "string out of range");
        let current = self.buffer.load(fret);
        let mask = 1u8 << string;
        let strings = if lit { current | mask } else { current & !mask };
        self.buffer.store(fret, strings);
    }

    /// Flip one LED.
    pub fn toggle_led(&self, fret: usize, string: usize) {
        assert!(fret < FRETS, "fret out of range");
        assert!(string < STRINGS, "string out of range");
        self.buffer.toggle(fret, 1u8 << string);
    }

    /// Whether one LED is currently painted on.
    #[must_use]
    pub fn led(&self, fret: usize, string: usize) -> bool {
        assert!(fret < FRETS, "fret out of range");
        assert!(string < STRINGS, "string out of range");
        self.buffer.load(fret) & (1u8 << string) != 0
    }

    /// Set the duty cycle (clamped to `1..=DUTY_CYCLE_LIMIT`). Returns the
    /// previous value.
    pub fn set_duty_cycle(&self, level: u8) -> u8 {
        self.duty_cycle.set(level)
    }

    /// Step brightness up one level and return the new value.
    pub fn increment_duty_cycle(&self) -> u8 {
        self.duty_cycle.increment()
    }

    /// Step brightness down one level and return the new value.
    pub fn decrement_duty_cycle(&self) -> u8 {
        self.duty_cycle.decrement()
    }

    /// Current duty cycle.
    #[must_use]
    pub fn duty_cycle(&self) -> u8 {
        self.duty_cycle.get()
    }

    /// Scan tick period for this fingerboard's dimensions.
    #[must_use]
    pub const fn tick_period() -> Duration {
        tick_period(FRETS, STRINGS)
    }
}

// ============================================================================
// Scan task
// ============================================================================

/// Drive the scanner forever at the fixed tick period.
///
/// Called by the concrete task that
/// [`fingerboard_scan_task!`](crate::fingerboard_scan_task) generates;
/// embassy tasks cannot be generic, so the macro pins the dimensions at
/// the call site.
#[cfg(not(feature = "host"))]
pub async fn scan_loop<const FRETS: usize, const STRINGS: usize, L>(
    fingerboard_static: &'static FingerboardStatic<FRETS>,
    lines: L,
) -> core::convert::Infallible
where
    L: FingerLines<FRETS, STRINGS>,
{
    let period = tick_period(FRETS, STRINGS);
    defmt::info!(
        "fingerboard: scan task started ({}x{} grid, {} µs tick)",
        FRETS,
        STRINGS,
        period.as_micros()
    );
    let mut scanner = Scanner::new(
        lines,
        &fingerboard_static.buffer,
        &fingerboard_static.duty_cycle,
    );
    let mut ticker = embassy_time::Ticker::every(period);
    loop {
        ticker.next().await;
        scanner.tick();
    }
}

/// Generate the concrete embassy task that runs the scan loop for fixed
/// dimensions.
///
/// Most users want [`fingerboard_device!`](crate::fingerboard_device),
/// which calls this internally.
#[doc(hidden)]
#[macro_export]
#[cfg(not(feature = "host"))]
macro_rules! fingerboard_scan_task {
    ($vis:vis $task_name:ident, frets: $frets:expr, strings: $strings:expr $(,)?) => {
        #[embassy_executor::task]
        $vis async fn $task_name(
            fingerboard_static: &'static $crate::fingerboard::FingerboardStatic<$frets>,
            lines: $crate::fingerboard::GpioLines<'static, $frets, $strings>,
        ) {
            let never =
                $crate::fingerboard::scan_loop::<$frets, $strings, _>(fingerboard_static, lines)
                    .await;
            match never {}
        }
    };
}

#[doc(hidden)]
#[cfg(not(feature = "host"))]
pub use fingerboard_scan_task;

/// Generate a resources struct and scan task for one fingerboard.
///
/// Expands to a struct holding the [`FingerboardStatic`] plus:
///
/// - `new_static()` — const constructor for the statics
/// - `new(lines, duty_cycle, spawner)` — blanks the display, sets the
///   starting duty cycle, spawns the scan task, and returns the
///   [`Fingerboard`] handle
///
/// See the [module documentation](mod@crate::fingerboard) for a full
/// example.
#[macro_export]
#[cfg(not(feature = "host"))]
macro_rules! fingerboard_device {
    (
        $vis:vis struct $resources_name:ident,
        task: $task_vis:vis $task_name:ident,
        frets: $frets:expr,
        strings: $strings:expr $(,)?
    ) => {
        $crate::fingerboard::fingerboard_scan_task!(
            $task_vis $task_name,
            frets: $frets,
            strings: $strings,
        );

        $vis struct $resources_name {
            fingerboard_static: $crate::fingerboard::FingerboardStatic<$frets>,
        }

        impl $resources_name {
            /// Create the static resources for this fingerboard instance.
            #[must_use]
            pub const fn new_static() -> Self {
                Self {
                    fingerboard_static: $crate::fingerboard::FingerboardStatic::new_static(),
                }
            }

            /// Construct the `Fingerboard` handle, spawning the scan task.
            ///
            /// The handle is live before the task's first tick, so the
            /// task never observes an unconfigured display.
            pub fn new(
                &'static self,
                lines: $crate::fingerboard::GpioLines<'static, $frets, $strings>,
                duty_cycle: u8,
                spawner: ::embassy_executor::Spawner,
            ) -> $crate::Result<$crate::fingerboard::Fingerboard<$frets, $strings>> {
                let fingerboard =
                    $crate::fingerboard::Fingerboard::new(&self.fingerboard_static, duty_cycle);
                let token = $task_name(&self.fingerboard_static, lines);
                spawner.spawn(token).map_err($crate::Error::TaskSpawn)?;
                Ok(fingerboard)
            }
        }
    };
}

#[doc(hidden)]
#[cfg(not(feature = "host"))]
pub use fingerboard_device;
