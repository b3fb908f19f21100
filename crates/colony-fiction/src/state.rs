//! Mutable state of one game, shared by every handler.

use colony_core::{
    Actor, Catalog, ColonyClock, GameConfig, ItemRef, Location, LocationId, WorldGraph,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::colony::{Places, build_colony};
use crate::cue::Cue;
use crate::error::FictionResult;

/// Everything a handler may read or change.
pub(crate) struct GameState {
    pub config: GameConfig,
    pub catalog: Catalog,
    pub world: WorldGraph,
    pub places: Places,
    pub actor: Actor,
    pub clock: ColonyClock,
    pub current: LocationId,
    pub rng: StdRng,
    pub mining_attempts: u32,
    pub total_donations: u32,
    pub debug_mode: bool,
    pub cues: Vec<Cue>,
}

impl GameState {
    pub fn new(config: GameConfig) -> FictionResult<Self> {
        config.validate()?;
        let catalog = Catalog::standard();
        let (world, places) = build_colony(&catalog, config.prophecy_cost)?;
        let clock = ColonyClock::new(config.day_length)?;
        let actor = Actor::new(&config);
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            current: places.quarters,
            config,
            catalog,
            world,
            places,
            actor,
            clock,
            rng,
            mining_attempts: 0,
            total_donations: 0,
            debug_mode: false,
            cues: Vec::new(),
        })
    }

    pub fn here(&self) -> FictionResult<&Location> {
        Ok(self.world.location(self.current)?)
    }

    pub fn here_mut(&mut self) -> FictionResult<&mut Location> {
        Ok(self.world.location_mut(self.current)?)
    }

    pub fn place_mut(&mut self, id: LocationId) -> FictionResult<&mut Location> {
        Ok(self.world.location_mut(id)?)
    }

    /// Queue a message at the player's location.
    pub fn say(&mut self, message: impl Into<String>) -> FictionResult<()> {
        self.here_mut()?.push_message(message);
        Ok(())
    }

    pub fn is_at(&self, id: LocationId) -> bool {
        self.current == id
    }

    pub fn in_state(&self, state: &str) -> bool {
        self.here().is_ok_and(|loc| loc.in_state(state))
    }

    pub fn enter_state(&mut self, state: &str) -> FictionResult<()> {
        self.here_mut()?.set_state(state);
        Ok(())
    }

    pub fn item(&self, name: &str) -> FictionResult<ItemRef> {
        Ok(self.catalog.require(name)?)
    }

    pub fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    /// Refinery and deposit station maintenance window.
    pub fn facilities_closed(&self) -> bool {
        self.clock
            .is_between(self.config.facility_close_hour, self.config.facility_open_hour)
    }

    /// Move the player and log it. Does not touch the clock.
    pub fn move_to(&mut self, id: LocationId) -> FictionResult<()> {
        let name = self.world.location(id)?.name().to_string();
        tracing::info!(from = %self.current, to = %id, location = %name, "player moved");
        self.current = id;
        Ok(())
    }

    pub fn advance(&mut self, hours: f64) -> FictionResult<()> {
        if self.clock.advance(hours)? {
            tracing::info!(day = self.clock.day(), "new day");
        }
        Ok(())
    }
}
