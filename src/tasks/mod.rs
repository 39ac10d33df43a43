//! Async tasks for the mood display firmware.
//!
//! - `animation`: Runs the state walker forever
//! - `producer`: Writes the target mood (buttons, or the ping-pong demo with `--features demo`)

pub mod animation;
pub mod producer;

pub use animation::animation_task;
#[cfg(not(feature = "demo"))]
pub use producer::button_task;
#[cfg(feature = "demo")]
pub use producer::ping_pong_task;
