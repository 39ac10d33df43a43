//! Mood face firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! A 128x128 ST7735 panel shows a face that walks between sad, neutral and happy
//! one animation at a time. The target mood comes from buttons A/B, or from the
//! ping-pong demo producer when built with `--features demo`.
//!
//! # Tasks
//!
//! | Task | Role |
//! |------|------|
//! | `animation_task` | Owns the display, runs the state walker forever |
//! | `button_task` / `ping_pong_task` | Writes the desired mood cell |
//!
//! On the host this binary compiles to an empty stub so `cargo test` can build
//! the whole package; the library carries everything testable.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]

#[cfg(target_arch = "arm")]
mod board;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(not(target_arch = "arm"))]
fn main() {}

#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_arch = "arm")]
use mood_display::MoodCell;
#[cfg(target_arch = "arm")]
use mood_display::config::{INITIAL_TARGET_MOOD, STARTING_MOOD};

// =============================================================================
// Shared Mood Cells
// =============================================================================

/// Target mood, written by the producer task and read by the walker.
#[cfg(target_arch = "arm")]
pub static DESIRED_MOOD: MoodCell = MoodCell::new(INITIAL_TARGET_MOOD);

/// Mood currently on screen, published by the walker.
#[cfg(target_arch = "arm")]
pub static CURRENT_MOOD: MoodCell = MoodCell::new(STARTING_MOOD);

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"mood-display"),
    embassy_rp::binary_info::rp_program_description!(c"Mood face animations on a 128x128 ST7735 panel"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) {
    use defmt::info;
    use embassy_rp::gpio::{Level, Output};
    use embassy_rp::spi::Spi;
    use embassy_time::Delay;
    use embedded_hal_bus::spi::ExclusiveDevice;
    use mood_display::assets::{self, mood_name};
    use mood_display::{AnimationEngineConfig, DisplayWriter, EngineSettings, SpiDisplayBus, StateWalker};
    use static_cell::StaticCell;

    use crate::board::{self, Walker};
    use crate::tasks::animation_task;

    static ENGINE_CONFIG: StaticCell<AnimationEngineConfig<'static>> = StaticCell::new();
    static WALKER: StaticCell<Walker> = StaticCell::new();

    info!("Mood display starting...");
    let p = embassy_rp::init(Default::default());

    // Display pins (see board.rs for the full mapping)
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let mut rst = Output::new(p.PIN_20, Level::High);
    let _backlight = Output::new(p.PIN_21, Level::High);

    board::hard_reset(&mut rst).await;

    // TX-only SPI with DMA, the panel has no MISO
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, board::display_spi_config());
    let Ok(device) = ExclusiveDevice::new(spi, cs, Delay);

    let mut writer = DisplayWriter::new(SpiDisplayBus::new(device, dc));
    if let Err(err) = writer.init(&mut Delay).await {
        defmt::panic!("Display init failed: {}", err);
    }
    info!("Display initialized");

    let config = match AnimationEngineConfig::new(
        assets::ascending(),
        assets::descending(),
        EngineSettings::default(),
        &DESIRED_MOOD,
        &CURRENT_MOOD,
    ) {
        Ok(config) => ENGINE_CONFIG.init(config),
        Err(err) => defmt::panic!("Invalid animation tables: {}", err),
    };
    info!(
        "Animation tables validated: {} states, starting at {}, target {}",
        config.state_count(),
        mood_name(STARTING_MOOD),
        mood_name(DESIRED_MOOD.load())
    );

    let walker: &'static mut Walker = WALKER.init(StateWalker::new(config, writer, Delay));
    spawner.spawn(animation_task(walker)).unwrap();
    info!("Animation task spawned");

    #[cfg(feature = "demo")]
    {
        spawner.spawn(crate::tasks::ping_pong_task()).unwrap();
        info!("Demo producer spawned");
    }

    #[cfg(not(feature = "demo"))]
    {
        use embassy_rp::gpio::{Input, Pull};

        // Active-low with internal pull-up
        let btn_up = Input::new(p.PIN_12, Pull::Up);
        let btn_down = Input::new(p.PIN_13, Pull::Up);
        spawner.spawn(crate::tasks::button_task(btn_up, btn_down)).unwrap();
        info!("Button producer spawned");
    }
}
