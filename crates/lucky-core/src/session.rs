//! Session wrapper tying the state machine to a roll source.
//!
//! `GameSession` owns the authoritative [`GameState`], the roll
//! source, and the session's [`RollLog`]. The frontend drives it with
//! [`press`](GameSession::press) and paints the returned view-model.

use crate::config::GameConfig;
use crate::dice::{DieFace, RollSource, SeededRolls};
use crate::history::{RollLog, RollOutcome, RollRecord};
use crate::state::{GameState, Phase};
use crate::view::{ViewModel, present};

/// One play session: state, randomness, and roll history.
pub struct GameSession<R: RollSource = SeededRolls> {
    state: GameState,
    rolls: R,
    log: RollLog,
}

impl GameSession<SeededRolls> {
    /// Create a session with a seeded roll source.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rolls(SeededRolls::new(config.seed))
    }
}

impl<R: RollSource> GameSession<R> {
    /// Create a session with an injected roll source.
    pub fn with_rolls(rolls: R) -> Self {
        Self {
            state: GameState::new(),
            rolls,
            log: RollLog::new(),
        }
    }

    /// Apply one press of the primary button and return the fresh
    /// view-model. A press that actually rolled the die is recorded
    /// in the log; a press that reset the session clears it.
    pub fn press(&mut self) -> ViewModel {
        let before = self.state.phase();
        self.state.primary_action(&mut self.rolls);

        match before {
            Phase::Playing => {
                if let Some(face) = self.state.result() {
                    self.log.append(RollRecord {
                        face: DieFace::from_value(face),
                        outcome: RollOutcome::from_face(face),
                        attempts_left: self.state.attempts_left(),
                    });
                }
            }
            Phase::Won | Phase::Exhausted => self.log.clear(),
            Phase::NotStarted => {}
        }

        self.view()
    }

    /// The view-model for the current state.
    pub fn view(&self) -> ViewModel {
        present(&self.state)
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The roll log for this session.
    pub fn log(&self) -> &RollLog {
        &self.log
    }
}
