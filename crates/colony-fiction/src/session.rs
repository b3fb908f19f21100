//! A running game of Colony 4B.

use colony_core::{
    Actor, ColonyClock, GameConfig, InputMode, Location, LocationId, WorldGraph,
};

use crate::cue::Cue;
use crate::dispatch::dispatch;
use crate::ending::{Ending, Flow};
use crate::error::FictionResult;
use crate::parser::{Command, Resolution, Verb, parse_command, resolve_input};
use crate::state::GameState;

/// The outcome of one line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// What the caller should do next.
    pub flow: Flow,
    /// How the raw input was read.
    pub resolution: Resolution,
}

/// An interactive game session.
///
/// Owns the world, the player and the clock. Every call runs to completion
/// before returning; messages are queued on locations and presentation
/// requests on the cue list, both drained by the frontend.
pub struct ColonySession {
    state: GameState,
}

impl ColonySession {
    /// Start a new game in the player's quarters.
    pub fn new(config: GameConfig) -> FictionResult<Self> {
        let state = GameState::new(config)?;
        tracing::info!(
            seed = state.config.seed,
            locations = state.world.len(),
            "session started"
        );
        Ok(Self { state })
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> Turn {
        let resolution = match self.state.here_mut() {
            Ok(here) => resolve_input(input, here),
            Err(e) => {
                tracing::error!(error = %e, "current location missing");
                Resolution::Empty
            }
        };

        let flow = match &resolution {
            Resolution::Action { verb, argument } => {
                let command = self.classify(verb, argument);
                self.execute(command)
            }
            Resolution::Empty | Resolution::Rejected => Flow::Continue,
        };
        Turn { flow, resolution }
    }

    /// Free-text prompts take the raw line unless the verb always works.
    fn classify(&self, verb: &str, argument: &str) -> Command {
        let free_text = self
            .state
            .here()
            .is_ok_and(|here| here.input_mode() == InputMode::FreeText);
        let bypass = Verb::parse(verb).is_some_and(Verb::bypasses_free_text);
        if free_text && !bypass {
            let input = if argument.is_empty() {
                verb.to_string()
            } else {
                format!("{verb} {argument}")
            };
            return Command::FreeText { input };
        }
        parse_command(verb, argument)
    }

    /// Execute a classified command, then check for the end of the quota
    /// period.
    ///
    /// Handler errors are logged and reported to the player as a message;
    /// the session keeps running.
    pub fn execute(&mut self, command: Command) -> Flow {
        tracing::debug!(?command, clock = %self.state.clock, "executing");
        let flow = match dispatch(&mut self.state, &command) {
            Ok(flow) => flow,
            Err(e) => {
                let text = command.text();
                tracing::error!(error = %e, command = %text, "command failed");
                if let Ok(here) = self.state.here_mut() {
                    here.push_message(format!("An error occurred trying to '{text}'."));
                }
                Flow::Continue
            }
        };

        if flow == Flow::Continue
            && self.state.clock.day() >= self.state.config.quota_period_days
        {
            let ending = Ending::for_period_end(
                self.state.actor.all_quests_complete(),
                self.state.actor.quota_met(),
            );
            tracing::info!(?ending, day = self.state.clock.day(), "quota period over");
            return Flow::Finished(ending);
        }
        if let Flow::Finished(ending) = flow {
            tracing::info!(?ending, clock = %self.state.clock, "game finished");
        }
        flow
    }

    /// The player's current location.
    pub fn location(&self) -> FictionResult<&Location> {
        self.state.here()
    }

    /// Mutable access to the player's current location.
    pub fn location_mut(&mut self) -> FictionResult<&mut Location> {
        self.state.here_mut()
    }

    /// Id of the player's current location.
    pub fn current_location_id(&self) -> LocationId {
        self.state.current
    }

    /// Take the messages queued at the current location.
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.state
            .here_mut()
            .map(Location::drain_messages)
            .unwrap_or_default()
    }

    /// Take the presentation requests emitted since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.state.cues)
    }

    /// The player.
    pub fn actor(&self) -> &Actor {
        &self.state.actor
    }

    /// Mutable access to the player.
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.state.actor
    }

    /// The colony clock.
    pub fn clock(&self) -> &ColonyClock {
        &self.state.clock
    }

    /// Mutable access to the colony clock.
    pub fn clock_mut(&mut self) -> &mut ColonyClock {
        &mut self.state.clock
    }

    /// The location graph.
    pub fn world(&self) -> &WorldGraph {
        &self.state.world
    }

    /// The configuration this game was started with.
    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Whether `debug` subcommands are enabled.
    pub fn debug_mode(&self) -> bool {
        self.state.debug_mode
    }

    /// Minshin donated at the Memorial Pond so far.
    pub fn total_donations(&self) -> u32 {
        self.state.total_donations
    }
}
