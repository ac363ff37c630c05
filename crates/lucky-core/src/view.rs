//! Pure presenter: derives the renderable view-model from the state.
//!
//! [`present`] is a total function called after every transition (and
//! once at initial render). It holds no state of its own; the
//! rendering surface paints exactly what the [`ViewModel`] says.

use serde::Serialize;

use crate::avatar::{Avatar, avatar_for};
use crate::dice::DieFace;
use crate::state::{BONUS_FACE, GameState, WINNING_FACE};

/// Welcome text shown before the game starts.
pub const WELCOME_TEXT: &str = "Welcome! You have 3 chances to roll the dice. \
Get a 6 to win. Rolling a 3 gives you another turn!";

/// Prompt shown after starting but before the first roll.
pub const ROLL_PROMPT: &str = "Press Roll to begin!";

/// Shown when a 3 grants a bonus reroll.
pub const BONUS_TEXT: &str = "Unlucky! You get another roll!";

/// Shown when a 6 wins the game.
pub const WIN_TEXT: &str = "You win!";

/// Shown when all attempts are spent without a 6.
pub const GAME_OVER_TEXT: &str = "Game Over! No more chances.";

/// Everything the rendering surface needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// Status message the avatar speaks.
    pub message: String,
    /// Die face to show, or `None` when no roll is visible.
    pub die_face: Option<DieFace>,
    /// Label of the single button.
    pub button_label: &'static str,
    /// The avatar delivering the message.
    pub avatar: Avatar,
    /// Remaining attempts, for gauges and the try-again message.
    pub attempts_left: u8,
}

/// Derive the view-model for the current state.
pub fn present(state: &GameState) -> ViewModel {
    let message = match (state.started(), state.result()) {
        (false, _) => WELCOME_TEXT.to_string(),
        (true, None) => ROLL_PROMPT.to_string(),
        (true, Some(BONUS_FACE)) => BONUS_TEXT.to_string(),
        (true, Some(WINNING_FACE)) => WIN_TEXT.to_string(),
        (true, Some(_)) if state.attempts_left() == 0 => GAME_OVER_TEXT.to_string(),
        (true, Some(_)) => format!("Sorry, try again! Attempts left: {}", state.attempts_left()),
    };

    let die_face = if state.started() {
        state.result().map(DieFace::from_value)
    } else {
        None
    };

    let button_label = if !state.started() {
        "Start"
    } else if state.attempts_left() == 0 || state.result() == Some(WINNING_FACE) {
        "Restart"
    } else {
        "Roll"
    };

    // Before the game the avatar always defaults to the first entry,
    // whatever index the state holds.
    let avatar_index = if state.started() {
        state.avatar_index()
    } else {
        1
    };

    ViewModel {
        message,
        die_face,
        button_label,
        avatar: avatar_for(avatar_index),
        attempts_left: state.attempts_left(),
    }
}
