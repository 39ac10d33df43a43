//! Button debounce handling.
//!
//! Provides time-based edge detection with debouncing to prevent multiple
//! triggers from contact bounce on physical buttons. The caller supplies the
//! timestamp, so the logic runs the same on the board and in host tests.

use crate::config::DEBOUNCE_MS;

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u64>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low` means pressed. `now_ms` is any
    /// monotonic millisecond timestamp.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u64,
    ) -> bool {
        if is_low == self.was_pressed {
            return false;
        }

        // Ignore edges that follow the previous one too closely
        if let Some(last) = self.last_change_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return false;
        }

        self.was_pressed = is_low;
        self.last_change_ms = Some(now_ms);
        is_low
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}
