//! Core game logic for Lucky Six, a three-attempt dice game.
//!
//! The player has 3 attempts to roll a 6 on a six-sided die. A 3 is a
//! bonus reroll that costs no attempt; a 6 wins and ends the session
//! immediately. A cosmetic avatar is re-randomized on every roll and
//! delivers the status message. The crate provides the state machine
//! ([`GameState`]), a pure presenter ([`present`]) that derives a
//! renderable [`ViewModel`], and a [`GameSession`] wrapper that ties
//! them to a seeded roll source and a roll log.

pub mod avatar;
pub mod config;
pub mod dice;
pub mod history;
pub mod session;
pub mod state;
pub mod view;

pub use avatar::{Avatar, AvatarId, Rgb, avatar_for};
pub use config::GameConfig;
pub use dice::{DieFace, RollSource, ScriptedRolls, SeededRolls};
pub use history::{RollLog, RollOutcome, RollRecord};
pub use session::GameSession;
pub use state::{BONUS_FACE, GameState, Phase, STARTING_ATTEMPTS, WINNING_FACE};
pub use view::{
    BONUS_TEXT, GAME_OVER_TEXT, ROLL_PROMPT, ViewModel, WELCOME_TEXT, WIN_TEXT, present,
};
