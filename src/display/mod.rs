//! Display output.
//!
//! - `bus`: Byte-oriented command/data transport ([`DisplayBus`]) and its SPI implementation
//! - `writer`: [`DisplayWriter`], which sets the addressing window and streams frames
//!
//! # Command Protocol
//!
//! The ST7735 accepts a one-byte opcode with the mode-select (D/C) line low,
//! followed by parameter or pixel bytes with the line high. The opcodes below must
//! match the controller exactly.

mod bus;
mod writer;

pub use bus::{DisplayBus, SpiDisplayBus};
pub use writer::{DisplayWriter, window_params};

// ST7735 Commands
pub const SWRESET: u8 = 0x01;
pub const SLPOUT: u8 = 0x11;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const RASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const COLMOD: u8 = 0x3A;

/// COLMOD parameter selecting 16 bits per pixel.
pub const COLMOD_16BPP: u8 = 0b101;
