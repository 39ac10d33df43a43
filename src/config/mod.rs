//! Application configuration.
//!
//! - `display`: Panel geometry and pre-computed buffer sizes
//! - `timing`: Frame cadence, settle delays, producer intervals
//!
//! [`EngineSettings`] bundles the runtime knobs of the animation engine; its
//! `Default` is built from these constants.

pub mod display;
pub mod timing;

// Re-export at config level for convenience
pub use display::{
    BYTES_PER_PIXEL,
    COLS,
    COLUMN_OFFSET,
    COMPRESSED_FRAME_BYTES,
    FRAME_BYTES,
    ROW_BYTES,
    ROW_OFFSET,
    ROWS,
};
pub use timing::{
    BUTTON_POLL_MS,
    COLMOD_SETTLE_MS,
    DEBOUNCE_MS,
    FRAME_PERIOD_MS,
    HARD_RESET_MS,
    PING_PONG_PERIOD_MS,
    SETTLE_MS,
};

use crate::codec::FrameCodec;

// =============================================================================
// Mood Defaults
// =============================================================================

/// Index the engine starts at after boot. Starting at the bottom makes the face
/// "wake up" and glide to the initial target.
pub const STARTING_MOOD: u8 = 0;

/// Target mood published before any producer runs (neutral).
pub const INITIAL_TARGET_MOOD: u8 = 2;

// =============================================================================
// Engine Settings
// =============================================================================

/// Runtime settings of the animation engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct EngineSettings {
    /// Index into the state tables the engine starts at.
    pub starting_index: u8,
    /// Delay after each frame in milliseconds.
    pub frame_period_ms: u32,
    /// How animation frames are turned into panel frames.
    pub codec: FrameCodec,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            starting_index: STARTING_MOOD,
            frame_period_ms: FRAME_PERIOD_MS,
            codec: FrameCodec::BitUnpackMonochrome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(ROW_BYTES, 256);
        assert_eq!(FRAME_BYTES, 32_768);
        assert_eq!(COMPRESSED_FRAME_BYTES, 2_048);
        // Each compressed byte expands to 8 pixels of 2 bytes
        assert_eq!(COMPRESSED_FRAME_BYTES * 16, FRAME_BYTES);
    }

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.starting_index, STARTING_MOOD);
        assert_eq!(settings.frame_period_ms, 250);
        assert_eq!(settings.codec, FrameCodec::BitUnpackMonochrome);
    }
}
