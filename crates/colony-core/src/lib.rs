//! Core model for the Colony 4B text adventure.
//!
//! Holds the pieces the engine mutates every turn: the day/hour clock, the
//! immutable item catalog, the player's actor state, locations with their
//! interaction-state menus, and the world graph that wires locations
//! together. Nothing in here knows about command parsing or the terminal.

/// Actor (player) state: inventory, currency, quests and quota.
pub mod actor;
/// Day/hour clock with fixed day length.
pub mod clock;
/// Tunable game constants.
pub mod config;
/// Error types for the core model.
pub mod error;
/// Item definitions and the catalog.
pub mod item;
/// Locations and their interaction-state machines.
pub mod location;
/// World graph: location arena, exits and singleton registry.
pub mod world;

/// Re-export actor types.
pub use actor::{Actor, Purchase, Quest, StoryFlag};
/// Re-export the clock.
pub use clock::ColonyClock;
/// Re-export the game configuration.
pub use config::GameConfig;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{Catalog, Item, ItemKind, ItemRef};
/// Re-export location and interaction-state types.
pub use location::{
    ContainerOpen, Exit, GO_BACK, INVENTORY_STATE, InputMode, InteractionState, Location, MAIN_STATE,
};
/// Re-export world graph types.
pub use world::{LocationId, Singleton, WorldGraph};
