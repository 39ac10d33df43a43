//! Mood display library - testable modules for the mood face firmware.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code;
//! the desktop simulator (`simulator/`) uses it with an emulated panel.
//!
//! # Architecture
//!
//! - [`engine::StateWalker`]: plays the animation bound to the current mood and
//!   glides one state per animation toward the published target
//! - [`codec::FrameCodec`]: expands 1-bit frames into RGB565
//! - [`display::DisplayWriter`]: sets the addressing window and streams rows over a
//!   [`display::DisplayBus`]
//! - [`mood::MoodCell`]: the two lock-free cells shared with target producers
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

// Must come first so the logging macros are visible to every module below
mod fmt;

// Configuration
pub mod config;
pub mod error;

// Core
pub mod codec;
pub mod display;
pub mod engine;
pub mod mood;

// Assets and target producers
pub mod assets;
pub mod button;
pub mod producer;

#[cfg(test)]
mod mock;

pub use codec::FrameCodec;
pub use config::EngineSettings;
pub use display::{DisplayBus, DisplayWriter, SpiDisplayBus};
pub use engine::{Animation, AnimationEngineConfig, Direction, StateTable, StateWalker, Step};
pub use error::{ConfigError, TransportError};
pub use mood::MoodCell;
