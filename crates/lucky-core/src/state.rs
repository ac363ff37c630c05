//! The game state machine.
//!
//! A session moves through four phases: `NotStarted → Playing →
//! {Won, Exhausted} → NotStarted`. The only transition operation is
//! [`GameState::primary_action`], driven by the single button the
//! player has. The operation is total: it cannot fail from any state.

use serde::{Deserialize, Serialize};

use crate::dice::RollSource;

/// Attempts a fresh session starts with.
pub const STARTING_ATTEMPTS: u8 = 3;

/// Rolling this face wins and ends the session immediately.
pub const WINNING_FACE: u8 = 6;

/// Rolling this face grants a bonus reroll (no attempt consumed).
pub const BONUS_FACE: u8 = 3;

/// Authoritative state of one play session.
///
/// Fields are private; the only mutation path is
/// [`primary_action`](Self::primary_action), which preserves the
/// invariants: `attempts_left` stays in 0..=3, `result` is in 1..=6
/// or absent, and `result` is absent exactly when no roll has
/// happened yet (pre-start or post-reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    result: Option<u8>,
    attempts_left: u8,
    started: bool,
    avatar_index: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            result: None,
            attempts_left: STARTING_ATTEMPTS,
            started: false,
            avatar_index: 1,
        }
    }
}

/// The phase of the session, derived from the state fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Welcome screen; no roll has happened.
    NotStarted,
    /// Attempts remain and the die can be rolled.
    Playing,
    /// A 6 was rolled; terminal.
    Won,
    /// All attempts spent without a 6; terminal.
    Exhausted,
}

impl GameState {
    /// Create a fresh session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rolled value, or `None` before the first roll.
    pub fn result(&self) -> Option<u8> {
        self.result
    }

    /// Remaining rolls (0..=3).
    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    /// Whether the session has moved past the welcome screen.
    pub fn started(&self) -> bool {
        self.started
    }

    /// The cosmetic avatar index (1..=5), re-drawn on every roll.
    pub fn avatar_index(&self) -> u8 {
        self.avatar_index
    }

    /// The derived phase of the session.
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::NotStarted
        } else if self.attempts_left > 0 {
            Phase::Playing
        } else if self.result == Some(WINNING_FACE) {
            Phase::Won
        } else {
            Phase::Exhausted
        }
    }

    /// Apply one press of the primary button.
    ///
    /// - Not started: enter the game; no roll on the first press.
    /// - Playing: roll the die. A 6 wins and zeroes the remaining
    ///   attempts; a 3 is a bonus reroll and costs nothing; any other
    ///   face costs one attempt. The avatar is re-drawn either way.
    /// - Terminal: reset wholesale to the initial state.
    pub fn primary_action(&mut self, rolls: &mut impl RollSource) {
        if !self.started {
            self.started = true;
        } else if self.attempts_left > 0 {
            let face = rolls.die_face();
            self.result = Some(face);
            if face == WINNING_FACE {
                self.attempts_left = 0;
            } else if face != BONUS_FACE {
                self.attempts_left -= 1;
            }
            self.avatar_index = rolls.avatar_index();
        } else {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{ScriptedRolls, SeededRolls};
    use proptest::prelude::*;

    fn started(faces: &[u8]) -> (GameState, ScriptedRolls) {
        let mut state = GameState::new();
        let mut rolls = ScriptedRolls::new(faces);
        state.primary_action(&mut rolls);
        (state, rolls)
    }

    #[test]
    fn fresh_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.result(), None);
        assert_eq!(state.attempts_left(), STARTING_ATTEMPTS);
        assert!(!state.started());
        assert_eq!(state.avatar_index(), 1);
        assert_eq!(state.phase(), Phase::NotStarted);
    }

    #[test]
    fn first_press_only_starts() {
        let (state, _) = started(&[6]);
        assert!(state.started());
        assert_eq!(state.result(), None);
        assert_eq!(state.attempts_left(), STARTING_ATTEMPTS);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn rolling_six_wins_immediately() {
        let (mut state, mut rolls) = started(&[6]);
        state.primary_action(&mut rolls);
        assert_eq!(state.result(), Some(6));
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(state.phase(), Phase::Won);
    }

    #[test]
    fn rolling_three_keeps_attempts() {
        let (mut state, mut rolls) = started(&[4, 3]);
        state.primary_action(&mut rolls);
        assert_eq!(state.attempts_left(), 2);
        state.primary_action(&mut rolls);
        assert_eq!(state.result(), Some(3));
        assert_eq!(state.attempts_left(), 2);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn losing_roll_costs_one_attempt() {
        let (mut state, mut rolls) = started(&[4]);
        state.primary_action(&mut rolls);
        assert_eq!(state.result(), Some(4));
        assert_eq!(state.attempts_left(), 2);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn exhausting_attempts_is_terminal() {
        let (mut state, mut rolls) = started(&[1, 2, 4]);
        for _ in 0..3 {
            state.primary_action(&mut rolls);
        }
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(state.phase(), Phase::Exhausted);
    }

    #[test]
    fn press_in_terminal_state_resets() {
        let (mut state, mut rolls) = started(&[6]);
        state.primary_action(&mut rolls);
        assert_eq!(state.phase(), Phase::Won);

        state.primary_action(&mut rolls);
        assert_eq!(state, GameState::default());
        assert_eq!(state.phase(), Phase::NotStarted);
    }

    #[test]
    fn avatar_redrawn_on_every_roll() {
        let mut state = GameState::new();
        let mut rolls = ScriptedRolls::new(&[4, 2]).with_avatars(&[3, 5]);
        state.primary_action(&mut rolls);
        assert_eq!(state.avatar_index(), 1);
        state.primary_action(&mut rolls);
        assert_eq!(state.avatar_index(), 3);
        state.primary_action(&mut rolls);
        assert_eq!(state.avatar_index(), 5);
    }

    #[test]
    fn win_overrides_remaining_attempts() {
        let (mut state, mut rolls) = started(&[1, 6]);
        state.primary_action(&mut rolls);
        assert_eq!(state.attempts_left(), 2);
        state.primary_action(&mut rolls);
        assert_eq!(state.attempts_left(), 0);
        assert_eq!(state.phase(), Phase::Won);
    }

    #[test]
    fn round_trip_serde() {
        let (mut state, mut rolls) = started(&[4]);
        state.primary_action(&mut rolls);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    proptest! {
        #[test]
        fn invariants_hold_over_any_sequence(seed: u64, presses in 0usize..200) {
            let mut state = GameState::new();
            let mut rolls = SeededRolls::new(seed);
            for _ in 0..presses {
                state.primary_action(&mut rolls);
                prop_assert!(state.attempts_left() <= STARTING_ATTEMPTS);
                prop_assert!((1..=5).contains(&state.avatar_index()));
                if let Some(r) = state.result() {
                    prop_assert!((1..=6).contains(&r));
                    prop_assert!(state.started());
                }
                if !state.started() {
                    prop_assert!(state.result().is_none());
                    prop_assert_eq!(state.attempts_left(), STARTING_ATTEMPTS);
                }
            }
        }
    }
}
