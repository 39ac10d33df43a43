//! Shared mood cells.
//!
//! Exactly two cells connect the animation engine to the outside world:
//! - *desired*: written by a producer (buttons, demo task, simulator keys), read
//!   by the engine once per completed animation
//! - *current*: written by the engine at the start of every cycle, read by anyone
//!
//! # Consistency
//!
//! Each cell is a single [`AtomicU8`] accessed with `Relaxed` ordering. A single
//! byte load/store is naturally atomic on the RP2350, so no lock is involved and
//! last write wins. Nothing ties the two cells together: an observer may see a
//! `current` that is up to one animation cycle old (a few hundred milliseconds),
//! and the engine may act on a `desired` that was replaced right after it was read.
//! Both are invisible at animation speed.

use core::sync::atomic::{AtomicU8, Ordering};

/// A byte-wide, lock-free mood index shared between tasks.
pub struct MoodCell(AtomicU8);

impl MoodCell {
    /// Create a cell holding `mood`. Usable in `static` initializers.
    pub const fn new(mood: u8) -> Self {
        Self(AtomicU8::new(mood))
    }

    /// Read the latest value.
    #[inline]
    pub fn load(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    /// Overwrite the value.
    #[inline]
    pub fn store(
        &self,
        mood: u8,
    ) {
        self.0.store(mood, Ordering::Relaxed);
    }
}

impl Default for MoodCell {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let cell = MoodCell::new(2);
        assert_eq!(cell.load(), 2);
        cell.store(4);
        cell.store(1);
        assert_eq!(cell.load(), 1);
    }

    #[test]
    fn test_static_cell() {
        static CELL: MoodCell = MoodCell::new(3);
        assert_eq!(CELL.load(), 3);
        CELL.store(0);
        assert_eq!(CELL.load(), 0);
    }
}
