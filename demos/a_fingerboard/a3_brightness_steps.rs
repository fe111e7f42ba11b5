//! Step the display brightness through every duty-cycle level, persisting
//! the final level the way the settings mode would.

#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use fretboard_kit::{
    Result, fingerboard_device,
    fingerboard::{DUTY_CYCLE_LIMIT, GpioLines, Line, Polarity},
    screen,
    settings::{Settings, SettingsStore},
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

    let mut store = SettingsStore::new(p.FLASH);
    let mut settings: Settings = store.load()?.unwrap_or_default();
    info!("starting brightness: {}", settings.brightness);

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

    let fingerboard = RESOURCES.new(lines, settings.brightness, spawner)?;
    fingerboard.set_all(true);

    // Walk down to minimum, then back up, showing each level for a second.
    loop {
        while fingerboard.duty_cycle() > 1 {
            let level = fingerboard.decrement_duty_cycle();
            log_level(level)?;
            Timer::after(Duration::from_secs(1)).await;
        }
        while fingerboard.duty_cycle() < DUTY_CYCLE_LIMIT {
            let level = fingerboard.increment_duty_cycle();
            log_level(level)?;
            Timer::after(Duration::from_secs(1)).await;
        }

        // Persist the level the sweep ended on, as the settings mode does.
        settings.brightness = fingerboard.duty_cycle();
        store.save(&settings)?;
    }
}

fn log_level(level: u8) -> Result<()> {
    let text = screen::brightness_screen(level)?;
    info!("{=str} / {=str}", text[0].as_str(), text[1].as_str());
    Ok(())
}
