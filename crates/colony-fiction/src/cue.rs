//! Presentation requests emitted by the engine.
//!
//! Handlers never touch the terminal. Anything that needs more than a queued
//! location message (a map, an animation, a celebration box) is pushed as a
//! [`Cue`] and drained by the frontend after the turn.

/// One timed line of an animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationStep {
    /// Text shown for this step.
    pub text: String,
    /// Pause after the text, in seconds.
    pub seconds: f64,
}

impl AnimationStep {
    /// Create a step.
    pub fn new(text: impl Into<String>, seconds: f64) -> Self {
        Self {
            text: text.into(),
            seconds,
        }
    }
}

/// How an animation is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Transit between sectors; clears the screen per step.
    Travel,
    /// A terminal screen with typed lines.
    Terminal,
    /// A deposit machine; ends with the Olympus sign-off.
    Deposit,
}

/// A presentation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    /// Show the colony map with the player's position.
    ShowMap {
        /// Current location name.
        location: String,
    },
    /// Play a stepped animation.
    Animation {
        /// Framing.
        kind: AnimationKind,
        /// Steps in order.
        steps: Vec<AnimationStep>,
    },
    /// Spinner while the mining gun runs.
    Mining {
        /// Spinner duration in seconds.
        seconds: f64,
    },
    /// Fireworks and a thank-you speech.
    Appreciation {
        /// NPC display name.
        npc: String,
        /// Speech text.
        message: String,
    },
    /// The quota was met for the first time.
    QuotaCelebration,
    /// A dramatic two-line reveal.
    Discovery {
        /// First line.
        heading: String,
        /// Revealed subject.
        subject: String,
    },
}
