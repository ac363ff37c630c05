//! Terminal UI for the Lucky Six dice game.
//!
//! Paints the view-model produced by `lucky-core` (die face, avatar,
//! message, button label, roll log) and routes the single primary
//! action key to the game session.

pub mod app;
pub mod error;
pub mod terminal;
pub mod ui;
