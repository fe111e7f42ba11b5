//! Walk the whole chord chart, painting each chord on the fingerboard and
//! logging the text the LCD would show.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use fretboard_kit::{
    Result,
    chords::ChordCursor,
    fingerboard_device,
    fingerboard::{GpioLines, Line, Polarity},
    painter::ChordPainter,
    screen,
};
use {defmt_rtt as _, panic_probe as _};

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

    let mut cursor = ChordCursor::new();
    loop {
        painter.paint_chord(cursor.chord());

        let text = screen::chord_screen(&cursor, true)?;
        info!("{=str} / {=str}", text[0].as_str(), text[1].as_str());

        Timer::after(Duration::from_secs(2)).await;
        if !cursor.next_chord() {
            cursor = ChordCursor::new();
        }
    }
}
