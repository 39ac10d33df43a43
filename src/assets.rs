//! Compiled-in mood faces.
//!
//! The frames are 1-bit compressed images rendered by `build.rs`. The engine treats
//! them as opaque; only their length is checked when the config is built.
//!
//! # States
//!
//! | Index | Ascending table      | Descending table     |
//! |-------|----------------------|----------------------|
//! | 0     | sad                  | sad                  |
//! | 1     | sad -> neutral       | neutral -> sad       |
//! | 2     | neutral              | neutral              |
//! | 3     | neutral -> happy     | happy -> neutral     |
//! | 4     | happy                | happy                |
//!
//! Odd indices are in-between states: reaching one plays the transition for the
//! direction of travel, then the walk continues (or the transition loops if the
//! target is set to it).

use crate::engine::{Animation, StateTable};

include!(concat!(env!("OUT_DIR"), "/faces.rs"));

// =============================================================================
// Mood Indices
// =============================================================================

pub const SAD: u8 = 0;
pub const SAD_NEUTRAL: u8 = 1;
pub const NEUTRAL: u8 = 2;
pub const NEUTRAL_HAPPY: u8 = 3;
pub const HAPPY: u8 = 4;

/// Number of mood states.
pub const MOOD_COUNT: usize = 5;

/// Highest valid mood index.
pub const MAX_MOOD: u8 = (MOOD_COUNT - 1) as u8;

// =============================================================================
// Tables
// =============================================================================

static ASCENDING: [Animation<'static>; MOOD_COUNT] = [
    Animation::new(&SAD_FRAMES),
    Animation::new(&SAD_TO_NEUTRAL_FRAMES),
    Animation::new(&NEUTRAL_FRAMES),
    Animation::new(&NEUTRAL_TO_HAPPY_FRAMES),
    Animation::new(&HAPPY_FRAMES),
];

static DESCENDING: [Animation<'static>; MOOD_COUNT] = [
    Animation::new(&SAD_FRAMES),
    Animation::new(&NEUTRAL_TO_SAD_FRAMES),
    Animation::new(&NEUTRAL_FRAMES),
    Animation::new(&HAPPY_TO_NEUTRAL_FRAMES),
    Animation::new(&HAPPY_FRAMES),
];

/// Animations played when the walk moves up (or at boot).
pub fn ascending() -> StateTable<'static> {
    StateTable::new(&ASCENDING)
}

/// Animations played when the walk moves down.
pub fn descending() -> StateTable<'static> {
    StateTable::new(&DESCENDING)
}

/// Human-readable name of a mood index, for logs and the simulator.
pub const fn mood_name(mood: u8) -> &'static str {
    match mood {
        SAD => "sad",
        SAD_NEUTRAL => "sad/neutral",
        NEUTRAL => "neutral",
        NEUTRAL_HAPPY => "neutral/happy",
        HAPPY => "happy",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COMPRESSED_FRAME_BYTES, EngineSettings};
    use crate::engine::AnimationEngineConfig;
    use crate::mood::MoodCell;

    #[test]
    fn test_tables_form_valid_config() {
        let desired = MoodCell::new(NEUTRAL);
        let current = MoodCell::new(SAD);
        let config = AnimationEngineConfig::new(
            ascending(),
            descending(),
            EngineSettings::default(),
            &desired,
            &current,
        );
        assert!(config.is_ok());
        assert_eq!(config.unwrap().state_count(), MOOD_COUNT);
    }

    #[test]
    fn test_resting_states_share_animations() {
        for mood in [SAD, NEUTRAL, HAPPY] {
            let up = ascending().get(mood).unwrap().frames();
            let down = descending().get(mood).unwrap().frames();
            assert_eq!(up.as_ptr(), down.as_ptr());
        }
    }

    #[test]
    fn test_frames_are_compressed_size() {
        for table in [ascending(), descending()] {
            for mood in 0..=MAX_MOOD {
                for frame in table.get(mood).unwrap().frames() {
                    assert_eq!(frame.len(), COMPRESSED_FRAME_BYTES);
                }
            }
        }
    }

    #[test]
    fn test_faces_differ_by_mood() {
        let sad = SAD_FRAMES[0];
        let neutral = NEUTRAL_FRAMES[0];
        let happy = HAPPY_FRAMES[0];
        assert_ne!(sad, neutral);
        assert_ne!(neutral, happy);
        // Blank frames would mean the renderer drew nothing
        assert!(sad.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_transitions_end_on_target_face() {
        // The last transition frame has the target's mouth with open eyes, like the
        // first resting frame
        assert_eq!(SAD_TO_NEUTRAL_FRAMES.last().unwrap(), &NEUTRAL_FRAMES[0]);
        assert_eq!(NEUTRAL_TO_HAPPY_FRAMES.last().unwrap(), &HAPPY_FRAMES[0]);
        assert_eq!(HAPPY_TO_NEUTRAL_FRAMES.last().unwrap(), &NEUTRAL_FRAMES[0]);
        assert_eq!(NEUTRAL_TO_SAD_FRAMES.last().unwrap(), &SAD_FRAMES[0]);
    }

    #[test]
    fn test_mood_names() {
        assert_eq!(mood_name(NEUTRAL), "neutral");
        assert_eq!(mood_name(200), "unknown");
    }
}
