//! State walker: plays the active animation and glides one state at a time
//! toward the published target.
//!
//! # Cycle
//!
//! 1. Publish the current index to the *current* cell
//! 2. Play every frame of the active animation, sleeping one frame period after
//!    each frame (including the last)
//! 3. Take one snapshot of the *desired* cell
//! 4. Move at most one state toward it, picking the animation from the table
//!    matching the direction of travel
//!
//! The walk is never preempted: a new target only takes effect after the running
//! animation finishes, and a jump of several states plays every intermediate
//! transition.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;

use super::animation::{Animation, AnimationEngineConfig, Direction};
use crate::config::FRAME_BYTES;
use crate::display::{DisplayBus, DisplayWriter};

/// Outcome of one transition decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Step {
    /// Moved up to the contained index.
    Ascended(u8),
    /// Moved down to the contained index.
    Descended(u8),
    /// Stayed put: target reached, or target out of range.
    Held,
}

/// The animation engine.
///
/// Owns the display writer and a decode scratch buffer sized for one full frame.
/// Nothing is allocated after construction.
pub struct StateWalker<'a, B, D> {
    config: &'a AnimationEngineConfig<'a>,
    writer: DisplayWriter<B>,
    delay: D,
    current: u8,
    direction: Direction,
    scratch: [u8; FRAME_BYTES],
}

impl<'a, B, D> StateWalker<'a, B, D>
where
    B: DisplayBus,
    D: DelayNs,
{
    /// Create the engine at the configured starting index, playing the ascending
    /// animation for that state. The writer must already be initialized.
    pub fn new(
        config: &'a AnimationEngineConfig<'a>,
        writer: DisplayWriter<B>,
        delay: D,
    ) -> Self {
        Self {
            config,
            writer,
            delay,
            current: config.settings().starting_index,
            direction: Direction::Ascending,
            scratch: [0u8; FRAME_BYTES],
        }
    }

    /// Current mood index, always in `0..N`.
    #[inline]
    pub const fn current_index(&self) -> u8 {
        self.current
    }

    /// Direction used to reach the current index.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Animation bound to the current index under the current direction.
    pub fn active_animation(&self) -> &'a Animation<'a> {
        let table = self.config.table(self.direction);
        match table.get(self.current) {
            Some(animation) => animation,
            // The config guarantees both tables cover every index the walker can reach
            None => unreachable!("mood index outside validated table"),
        }
    }

    /// Apply the transition policy for one completed animation.
    ///
    /// Moves up only if `desired` is a valid state above the current one, moves
    /// down if `desired` is below, otherwise holds.
    pub fn step_toward(
        &mut self,
        desired: u8,
    ) -> Step {
        let len = self.config.state_count();

        if desired > self.current && usize::from(desired) < len {
            self.current += 1;
            self.direction = Direction::Ascending;
            Step::Ascended(self.current)
        } else if desired < self.current {
            // current > desired >= 0, so this never underflows
            self.current -= 1;
            self.direction = Direction::Descending;
            Step::Descended(self.current)
        } else {
            if usize::from(desired) >= len {
                warn!("Ignoring out-of-range target mood {} (states: {})", desired, len);
            }
            Step::Held
        }
    }

    /// Play the active animation once, front to back.
    pub async fn play_active(&mut self) -> Result<(), B::Error> {
        let animation = self.active_animation();
        let codec = self.config.settings().codec;
        let period_ms = self.config.settings().frame_period_ms;

        for frame in animation.frames() {
            if codec.needs_decode() {
                codec.decode(frame, &mut self.scratch);
                self.writer.draw(&self.scratch).await?;
            } else {
                self.writer.draw(frame).await?;
            }
            self.delay.delay_ms(period_ms).await;
        }
        Ok(())
    }

    /// Run one full cycle: publish, play, read the target once, step.
    pub async fn cycle(&mut self) -> Result<Step, B::Error> {
        self.config.publish_current(self.current);
        self.play_active().await?;

        let desired = self.config.desired();
        let step = self.step_toward(desired);
        match step {
            Step::Ascended(index) | Step::Descended(index) => {
                info!("Mood {} -> target {} ({})", index, desired, step);
            }
            Step::Held => trace!("Mood {} held", self.current),
        }
        Ok(step)
    }

    /// Run forever. Only returns if the display transport fails.
    pub async fn run(&mut self) -> Result<Infallible, B::Error> {
        info!(
            "Animation engine started at mood {} of {}",
            self.current,
            self.config.state_count()
        );
        loop {
            self.cycle().await?;
        }
    }

    /// Access the display writer.
    pub fn writer(&self) -> &DisplayWriter<B> {
        &self.writer
    }
}

// =============================================================================
// Tests
// =============================================================================
