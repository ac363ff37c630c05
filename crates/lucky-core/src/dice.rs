//! Die faces and the roll source abstraction.
//!
//! All randomness in the game flows through the [`RollSource`] trait,
//! so the state machine stays deterministic under test: production
//! code uses [`SeededRolls`], tests feed exact sequences through
//! [`ScriptedRolls`].

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A face of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DieFace {
    /// One pip.
    One,
    /// Two pips.
    Two,
    /// Three pips — the bonus reroll face.
    Three,
    /// Four pips.
    Four,
    /// Five pips.
    Five,
    /// Six pips — the winning face.
    Six,
}

impl DieFace {
    /// Map a rolled value to a face. Out-of-range values fall back to
    /// the last entry rather than failing; the state machine never
    /// produces one, so this is a defect guard, not an error path.
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            _ => Self::Six,
        }
    }

    /// The numeric value of this face (1-6).
    pub fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    /// All faces in ascending order.
    pub fn all() -> &'static [Self] {
        &[
            Self::One,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
        ]
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Source of the two random draws the game makes.
///
/// Implementations must return uniform values in the documented
/// ranges; the state machine trusts the contract.
pub trait RollSource {
    /// Draw a die face value, uniform in 1..=6.
    fn die_face(&mut self) -> u8;

    /// Draw an avatar index, uniform in 1..=5.
    fn avatar_index(&mut self) -> u8;
}

/// A [`RollSource`] backed by a seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRolls {
    rng: StdRng,
}

impl SeededRolls {
    /// Create a roll source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RollSource for SeededRolls {
    fn die_face(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }

    fn avatar_index(&mut self) -> u8 {
        self.rng.random_range(1..=5)
    }
}

/// A [`RollSource`] that replays fixed sequences.
///
/// Faces and avatar indices are consumed front to back; an exhausted
/// script yields 1. Used by tests to force exact rolls, and usable
/// for replaying a recorded session.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    faces: VecDeque<u8>,
    avatars: VecDeque<u8>,
}

impl ScriptedRolls {
    /// Create a scripted source from a sequence of die faces.
    pub fn new(faces: &[u8]) -> Self {
        Self {
            faces: faces.iter().copied().collect(),
            avatars: VecDeque::new(),
        }
    }

    /// Set the avatar index sequence.
    pub fn with_avatars(mut self, avatars: &[u8]) -> Self {
        self.avatars = avatars.iter().copied().collect();
        self
    }
}

impl RollSource for ScriptedRolls {
    fn die_face(&mut self) -> u8 {
        self.faces.pop_front().unwrap_or(1)
    }

    fn avatar_index(&mut self) -> u8 {
        self.avatars.pop_front().unwrap_or(1)
    }
}
