//! Game engine for Colony 4B.
//!
//! Turns typed input into game actions: menu numbers and free text are
//! resolved against the player's location, classified into fixed phrases or
//! verbs, and dispatched to handlers that change the world, the player and
//! the clock. Presentation is left to the frontend, which drains queued
//! messages and [`Cue`]s after each turn.

/// The colony map and its fixed location names.
pub mod colony;
/// Presentation requests for the frontend.
pub mod cue;
/// Endings and turn outcomes.
pub mod ending;
/// Error types for the engine.
pub mod error;
/// Story text.
pub mod narrative;
/// Input resolution and command classification.
pub mod parser;
/// Game session management.
pub mod session;

mod dispatch;
mod handlers;
mod state;

/// Re-export the colony builder.
pub use colony::{Places, build_colony, connect_industrial_and_refinery};
/// Re-export presentation cues.
pub use cue::{AnimationKind, AnimationStep, Cue};
/// Re-export endings and turn outcomes.
pub use ending::{Ending, Flow};
/// Re-export error types.
pub use error::{FictionError, FictionResult};
/// Re-export the input parser.
pub use parser::{Command, Phrase, Resolution, Verb, parse_command, resolve_input};
/// Re-export the session.
pub use session::{ColonySession, Turn};
