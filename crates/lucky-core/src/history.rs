//! Roll log for one session.
//!
//! Every completed roll is recorded so the frontend can show how the
//! session unfolded. The log is cleared when the session resets.

use serde::{Deserialize, Serialize};

use crate::dice::DieFace;
use crate::state::{BONUS_FACE, WINNING_FACE};

/// What a single roll meant for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// A 6: the session is won.
    Won,
    /// A 3: bonus reroll, no attempt consumed.
    BonusReroll,
    /// Any other face: one attempt consumed.
    Missed,
}

impl RollOutcome {
    /// Classify a rolled face.
    pub fn from_face(face: u8) -> Self {
        match face {
            WINNING_FACE => Self::Won,
            BONUS_FACE => Self::BonusReroll,
            _ => Self::Missed,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::BonusReroll => write!(f, "bonus reroll"),
            Self::Missed => write!(f, "missed"),
        }
    }
}

/// One recorded roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The face that came up.
    pub face: DieFace,
    /// What the roll meant.
    pub outcome: RollOutcome,
    /// Attempts remaining after the roll.
    pub attempts_left: u8,
}

impl std::fmt::Display for RollRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rolled {} ({}, {} left)",
            self.face, self.outcome, self.attempts_left
        )
    }
}

/// Chronological log of the rolls in the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollLog {
    records: Vec<RollRecord>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: RollRecord) {
        self.records.push(record);
    }

    /// All records in roll order.
    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no roll has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop all records. Called when the session resets.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_classification() {
        assert_eq!(RollOutcome::from_face(6), RollOutcome::Won);
        assert_eq!(RollOutcome::from_face(3), RollOutcome::BonusReroll);
        assert_eq!(RollOutcome::from_face(1), RollOutcome::Missed);
        assert_eq!(RollOutcome::from_face(5), RollOutcome::Missed);
    }

    #[test]
    fn record_display() {
        let record = RollRecord {
            face: DieFace::Four,
            outcome: RollOutcome::Missed,
            attempts_left: 2,
        };
        assert_eq!(record.to_string(), "rolled 4 (missed, 2 left)");
    }

    #[test]
    fn append_and_clear() {
        let mut log = RollLog::new();
        assert!(log.is_empty());

        log.append(RollRecord {
            face: DieFace::Three,
            outcome: RollOutcome::BonusReroll,
            attempts_left: 3,
        });
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].face, DieFace::Three);

        log.clear();
        assert!(log.is_empty());
    }
}
