//! Animation tables and engine configuration.
//!
//! All of this is built once from compiled-in data and never mutated. The
//! constructor of [`AnimationEngineConfig`] is the single place where table
//! consistency is checked, so the engine loop can index without further checks.

use core::fmt;

use crate::config::EngineSettings;
use crate::error::ConfigError;
use crate::mood::MoodCell;

/// One encoded image: either compressed (1 bpp) or decoded (RGB565).
pub type Frame<'a> = &'a [u8];

/// Table a transition was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Direction {
    /// Moving toward a higher mood index.
    Ascending,
    /// Moving toward a lower mood index.
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

/// An ordered run of frames played front to back.
#[derive(Clone, Copy, Debug)]
pub struct Animation<'a> {
    frames: &'a [Frame<'a>],
}

impl<'a> Animation<'a> {
    /// Wrap a frame list. Emptiness is rejected later by [`AnimationEngineConfig::new`].
    pub const fn new(frames: &'a [Frame<'a>]) -> Self {
        Self { frames }
    }

    #[inline]
    pub const fn frames(&self) -> &'a [Frame<'a>] {
        self.frames
    }

    #[inline]
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animations indexed by mood state.
#[derive(Clone, Copy, Debug)]
pub struct StateTable<'a> {
    animations: &'a [Animation<'a>],
}

impl<'a> StateTable<'a> {
    pub const fn new(animations: &'a [Animation<'a>]) -> Self {
        Self { animations }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.animations.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Animation for `index`, or `None` outside the table.
    #[inline]
    pub fn get(
        &self,
        index: u8,
    ) -> Option<&'a Animation<'a>> {
        self.animations.get(usize::from(index))
    }

    /// Check that every animation is non-empty and every frame has `frame_len` bytes.
    fn validate(
        &self,
        direction: Direction,
        frame_len: usize,
    ) -> Result<(), ConfigError> {
        for (index, animation) in self.animations.iter().enumerate() {
            if animation.frames.is_empty() {
                return Err(ConfigError::EmptyAnimation { direction, index });
            }
            for (frame, bytes) in animation.frames.iter().enumerate() {
                if bytes.len() != frame_len {
                    return Err(ConfigError::FrameSize {
                        direction,
                        index,
                        frame,
                        expected: frame_len,
                        actual: bytes.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Validated, immutable configuration of the animation engine.
pub struct AnimationEngineConfig<'a> {
    ascending: StateTable<'a>,
    descending: StateTable<'a>,
    settings: EngineSettings,
    desired: &'a MoodCell,
    current: &'a MoodCell,
}

impl<'a> AnimationEngineConfig<'a> {
    /// Validate and bundle the engine configuration.
    ///
    /// `desired` is only ever read by the engine; `current` is only ever written.
    pub fn new(
        ascending: StateTable<'a>,
        descending: StateTable<'a>,
        settings: EngineSettings,
        desired: &'a MoodCell,
        current: &'a MoodCell,
    ) -> Result<Self, ConfigError> {
        if ascending.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        if ascending.len() != descending.len() {
            return Err(ConfigError::TableLengthMismatch {
                ascending: ascending.len(),
                descending: descending.len(),
            });
        }
        // Every index must be representable in a byte-wide mood cell
        if ascending.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyStates { len: ascending.len() });
        }
        if usize::from(settings.starting_index) >= ascending.len() {
            return Err(ConfigError::StartOutOfRange {
                start: settings.starting_index,
                len: ascending.len(),
            });
        }

        let frame_len = settings.codec.input_len();
        ascending.validate(Direction::Ascending, frame_len)?;
        descending.validate(Direction::Descending, frame_len)?;
        debug!("Validated {} states, codec {}", ascending.len(), settings.codec);

        Ok(Self {
            ascending,
            descending,
            settings,
            desired,
            current,
        })
    }

    /// Number of mood states N.
    #[inline]
    pub const fn state_count(&self) -> usize {
        self.ascending.len()
    }

    #[inline]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    #[inline]
    pub const fn table(
        &self,
        direction: Direction,
    ) -> &StateTable<'a> {
        match direction {
            Direction::Ascending => &self.ascending,
            Direction::Descending => &self.descending,
        }
    }

    /// Snapshot of the externally published target.
    #[inline]
    pub fn desired(&self) -> u8 {
        self.desired.load()
    }

    /// Publish the engine's current index.
    #[inline]
    pub fn publish_current(
        &self,
        index: u8,
    ) {
        self.current.store(index);
    }
}

// =============================================================================
// Tests
// =============================================================================
