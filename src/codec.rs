//! Frame codec: 1-bit monochrome frames to RGB565 panel frames.
//!
//! # Format
//!
//! A compressed frame stores one bit per pixel in raster order (row-major), most
//! significant bit first within each byte. Bit 0 is white, bit 1 is black. Each
//! compressed byte expands to 16 decoded bytes (8 pixels x 2 bytes), so the pixel
//! for compressed byte `i`, bit `b` (7 = MSB) starts at decoded offset
//! `i * 16 + (7 - b) * 2`.
//!
//! Decoding writes every output byte, so the result never depends on what the
//! destination buffer held before.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

use crate::config::{BYTES_PER_PIXEL, COMPRESSED_FRAME_BYTES, FRAME_BYTES};

/// Decoded bytes produced by one compressed byte.
const BYTES_PER_SOURCE_BYTE: usize = 8 * BYTES_PER_PIXEL;

/// How animation frames are turned into panel frames before transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum FrameCodec {
    /// Frames are already RGB565 and go to the panel untouched.
    Identity,
    /// Frames are 1-bit monochrome and get expanded into a scratch buffer.
    #[default]
    BitUnpackMonochrome,
}

impl FrameCodec {
    /// Length every source frame must have for this codec.
    #[inline]
    pub const fn input_len(self) -> usize {
        match self {
            Self::Identity => FRAME_BYTES,
            Self::BitUnpackMonochrome => COMPRESSED_FRAME_BYTES,
        }
    }

    /// Whether frames need a pass through [`FrameCodec::decode`] before drawing.
    #[inline]
    pub const fn needs_decode(self) -> bool {
        matches!(self, Self::BitUnpackMonochrome)
    }

    /// Decode `src` into `dst`.
    ///
    /// `src` must be [`FrameCodec::input_len`] bytes long.
    pub fn decode(
        self,
        src: &[u8],
        dst: &mut [u8; FRAME_BYTES],
    ) {
        match self {
            Self::Identity => dst.copy_from_slice(src),
            Self::BitUnpackMonochrome => decode_monochrome(src, dst),
        }
    }
}

/// Big-endian RGB565 bytes of a color, the order the panel expects on the wire.
#[inline]
pub fn pixel_bytes(color: Rgb565) -> [u8; 2] {
    let raw: RawU16 = color.into();
    raw.into_inner().to_be_bytes()
}

/// Expand a 1-bit frame (bit 0 white, bit 1 black) into RGB565.
///
/// `compressed` must be [`COMPRESSED_FRAME_BYTES`] long.
pub fn decode_monochrome(
    compressed: &[u8],
    decoded: &mut [u8; FRAME_BYTES],
) {
    debug_assert_eq!(compressed.len(), COMPRESSED_FRAME_BYTES);

    let white = pixel_bytes(Rgb565::WHITE);
    let black = pixel_bytes(Rgb565::BLACK);

    for (&byte, out) in compressed
        .iter()
        .zip(decoded.chunks_exact_mut(BYTES_PER_SOURCE_BYTE))
    {
        // Bit 7 lands in the first pixel of the group
        for (bit, pixel) in (0..8).rev().zip(out.chunks_exact_mut(BYTES_PER_PIXEL)) {
            let color = if (byte >> bit) & 1 == 0 { white } else { black };
            pixel.copy_from_slice(&color);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
