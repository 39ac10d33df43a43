//! Board wiring for a Pico 2 with a 1.44" 128x128 ST7735 module.
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17 (driven by `ExclusiveDevice`)
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Reset: GPIO20
//! - Backlight: GPIO21
//! - Buttons: A = GPIO12 (mood up), B = GPIO13 (mood down), active-low

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use mood_display::config::HARD_RESET_MS;
use mood_display::{SpiDisplayBus, StateWalker};

/// SPI device with software chip-select.
pub type DisplaySpi = ExclusiveDevice<Spi<'static, SPI0, Async>, Output<'static>, Delay>;

/// Command/data transport to the panel.
pub type DisplayBus = SpiDisplayBus<DisplaySpi, Output<'static>>;

/// The animation engine as wired on this board.
pub type Walker = StateWalker<'static, DisplayBus, Delay>;

/// SPI configuration for the ST7735 display.
/// The ST7735 write cycle is 66 ns, so 15 MHz is the datasheet maximum.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 15_000_000;
    config
}

/// Pulse the panel's reset line.
pub async fn hard_reset(rst: &mut Output<'_>) {
    rst.set_low();
    Timer::after_millis(HARD_RESET_MS).await;
    rst.set_high();
    Timer::after_millis(HARD_RESET_MS).await;
}
