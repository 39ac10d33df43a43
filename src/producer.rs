//! Target-mood producers.
//!
//! The engine only reads the *desired* cell; something else has to write it.
//! Two local producers are provided:
//! - [`PingPong`]: demo mode, bounces the target between the extremes
//! - [`nudge`]: one-step changes from buttons or keys

/// Direction of a manual nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Nudge {
    Up,
    Down,
}

/// Move `target` one step, saturating at `0` and `max`.
#[inline]
pub const fn nudge(
    target: u8,
    direction: Nudge,
    max: u8,
) -> u8 {
    match direction {
        Nudge::Up if target < max => target + 1,
        Nudge::Up => max,
        Nudge::Down => target.saturating_sub(1),
    }
}

/// Demo producer that sends the face back and forth between the two extremes.
///
/// Once the observed current mood reaches the top, the target flips to the bottom
/// and vice versa. Anywhere in between the previous target is kept, so the walk
/// always completes before turning around.
pub struct PingPong {
    max: u8,
    target: u8,
}

impl PingPong {
    /// Start by heading for the top.
    pub const fn new(max: u8) -> Self {
        Self { max, target: max }
    }

    /// Target to publish given the engine's current mood.
    pub fn next_target(
        &mut self,
        current: u8,
    ) -> u8 {
        if current >= self.max {
            self.target = 0;
        } else if current == 0 {
            self.target = self.max;
        }
        self.target
    }

    #[inline]
    pub const fn target(&self) -> u8 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_saturates() {
        assert_eq!(nudge(2, Nudge::Up, 4), 3);
        assert_eq!(nudge(4, Nudge::Up, 4), 4);
        assert_eq!(nudge(2, Nudge::Down, 4), 1);
        assert_eq!(nudge(0, Nudge::Down, 4), 0);
    }

    #[test]
    fn test_nudge_clamps_stale_out_of_range_target() {
        assert_eq!(nudge(9, Nudge::Up, 4), 4);
    }

    #[test]
    fn test_ping_pong_bounces() {
        let mut producer = PingPong::new(4);
        assert_eq!(producer.target(), 4);
        assert_eq!(producer.next_target(2), 4);
        assert_eq!(producer.next_target(3), 4);
        assert_eq!(producer.next_target(4), 0);
        // Keeps heading down while in between
        assert_eq!(producer.next_target(2), 0);
        assert_eq!(producer.next_target(0), 4);
    }
}
