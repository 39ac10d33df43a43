//! Animation engine.
//!
//! - `animation`: Frames, animations, per-direction state tables and the validated
//!   [`AnimationEngineConfig`]
//! - `walker`: [`StateWalker`], the perpetual play-then-step loop

mod animation;
mod walker;

pub use animation::{Animation, AnimationEngineConfig, Direction, Frame, StateTable};
pub use walker::{StateWalker, Step};
