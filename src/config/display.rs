//! Panel geometry for the 1.44" 128x128 ST7735 module.
//!
//! # Optimization: Pre-computed Buffer Sizes
//!
//! Every buffer length used by the codec and the writer is derived here at compile
//! time, so the steady-state loop never computes a size.

// =============================================================================
// Panel Geometry
// =============================================================================

/// Pixel rows on the panel.
pub const ROWS: usize = 128;

/// Pixel columns on the panel.
pub const COLS: usize = 128;

/// RGB565: two bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 2;

/// The controller RAM is larger than the glass; the visible area starts 2 columns in.
pub const COLUMN_OFFSET: u16 = 2;

/// The visible area starts 2 rows in.
pub const ROW_OFFSET: u16 = 2;

// =============================================================================
// Pre-computed Buffer Sizes
// =============================================================================

/// One panel row of decoded pixels (256 bytes).
pub const ROW_BYTES: usize = COLS * BYTES_PER_PIXEL;

/// One decoded RGB565 frame (32,768 bytes).
pub const FRAME_BYTES: usize = ROWS * ROW_BYTES;

/// One compressed 1-bit-per-pixel frame (2,048 bytes).
pub const COMPRESSED_FRAME_BYTES: usize = ROWS * COLS / 8;

// Compressed frames are packed 8 pixels per byte, with no partial bytes.
const _: () = assert!((ROWS * COLS) % 8 == 0);
