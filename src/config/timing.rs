//! Timing constants.
//!
//! Settle delays follow the ST7735 datasheet minimums; the frame period sets the
//! animation cadence.

/// Delay after every frame, including the last frame of an animation.
pub const FRAME_PERIOD_MS: u32 = 250;

/// Settle time after SWRESET, SLPOUT and DISPON.
pub const SETTLE_MS: u32 = 150;

/// Settle time after selecting the pixel format.
pub const COLMOD_SETTLE_MS: u32 = 10;

/// Low and high phases of the hardware reset pulse.
pub const HARD_RESET_MS: u64 = 300;

/// How often the demo producer re-evaluates its target.
pub const PING_PONG_PERIOD_MS: u64 = 15_000;

/// Button sampling interval.
pub const BUTTON_POLL_MS: u64 = 10;

/// Minimum time between accepted button edges.
pub const DEBOUNCE_MS: u64 = 50;
