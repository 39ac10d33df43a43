//! Error types.
//!
//! Both kinds are fatal: configuration errors stop the firmware before the
//! animation loop starts, transport errors stop it wherever they happen. Nothing
//! in the crate retries.

use core::fmt;

use embedded_hal::digital;
use embedded_hal::spi;

use crate::engine::Direction;

/// Invalid animation engine configuration, detected at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ConfigError {
    /// The ascending table has no states.
    EmptyTable,
    /// Ascending and descending tables describe a different number of states.
    TableLengthMismatch { ascending: usize, descending: usize },
    /// More states than a byte-wide mood cell can address.
    TooManyStates { len: usize },
    /// The starting index is not a valid state.
    StartOutOfRange { start: u8, len: usize },
    /// An animation with zero frames.
    EmptyAnimation { direction: Direction, index: usize },
    /// A frame whose length does not match what the configured codec consumes.
    FrameSize {
        direction: Direction,
        index: usize,
        frame: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "state table is empty"),
            Self::TableLengthMismatch { ascending, descending } => write!(
                f,
                "ascending table has {ascending} states but descending table has {descending}"
            ),
            Self::TooManyStates { len } => write!(f, "{len} states do not fit a byte-wide index"),
            Self::StartOutOfRange { start, len } => {
                write!(f, "starting index {start} is outside 0..{len}")
            }
            Self::EmptyAnimation { direction, index } => {
                write!(f, "{direction} animation {index} has no frames")
            }
            Self::FrameSize {
                direction,
                index,
                frame,
                expected,
                actual,
            } => write!(
                f,
                "{direction} animation {index} frame {frame} is {actual} bytes, expected {expected}"
            ),
        }
    }
}

/// Failure of the byte transport to the display controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum TransportError {
    /// The SPI transfer failed.
    Spi(spi::ErrorKind),
    /// The data/command select line could not be driven.
    ModeSelect(digital::ErrorKind),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(kind) => write!(f, "SPI transfer failed: {kind}"),
            Self::ModeSelect(kind) => write!(f, "mode-select pin failed: {kind}"),
        }
    }
}

impl core::error::Error for ConfigError {}
impl core::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::TableLengthMismatch {
            ascending: 5,
            descending: 4,
        };
        assert_eq!(
            err.to_string(),
            "ascending table has 5 states but descending table has 4"
        );

        let err = ConfigError::FrameSize {
            direction: Direction::Descending,
            index: 3,
            frame: 1,
            expected: 2048,
            actual: 2047,
        };
        assert_eq!(
            err.to_string(),
            "descending animation 3 frame 1 is 2047 bytes, expected 2048"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Spi(spi::ErrorKind::Overrun);
        assert!(err.to_string().starts_with("SPI transfer failed"));
    }
}
