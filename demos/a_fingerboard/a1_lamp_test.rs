//! Powerup lamp test: sweep one LED at a time across the whole board.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use fretboard_kit::{
    Result, fingerboard_device,
    fingerboard::{GpioLines, Line, Polarity},
    painter::{ChordPainter, LAMP_TEST_STEP_MILLIS, LampTest},
};
use {defmt_rtt as _, panic_probe as _};

const FRETS: usize = 5;
const STRINGS: usize = 6;

fingerboard_device! {
    struct FingerboardResources,
    task: scan_task,
    frets: 5,
    strings: 6,
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    static RESOURCES: FingerboardResources = FingerboardResources::new_static();

    // Fret lines source the LED rows; string lines sink the columns.
    let lines = GpioLines::new(
        [
            Line::new(p.PIN_2, Polarity::ActiveHigh),
            Line::new(p.PIN_3, Polarity::ActiveHigh),
            Line::new(p.PIN_4, Polarity::ActiveHigh),
            Line::new(p.PIN_5, Polarity::ActiveHigh),
            Line::new(p.PIN_6, Polarity::ActiveHigh),
        ],
        [
            Line::new(p.PIN_8, Polarity::ActiveLow),
            Line::new(p.PIN_9, Polarity::ActiveLow),
            Line::new(p.PIN_10, Polarity::ActiveLow),
            Line::new(p.PIN_11, Polarity::ActiveLow),
            Line::new(p.PIN_12, Polarity::ActiveLow),
            Line::new(p.PIN_13, Polarity::ActiveLow),
        ],
    );

    let fingerboard = RESOURCES.new(lines, 10, spawner)?;
    let painter = ChordPainter::new(fingerboard);

    loop {
        for step in LampTest::<FRETS, STRINGS>::default() {
            painter.lamp_test_step(step);
            Timer::after(Duration::from_millis(LAMP_TEST_STEP_MILLIS)).await;
        }
        Timer::after(Duration::from_secs(1)).await;
    }
}
