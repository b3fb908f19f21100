//! World graph: an arena of locations connected by labelled exits.
//!
//! Construction is two-phase. Every location is allocated first, then exits
//! are wired by id, so no location ever holds a reference to another.
//! Locations that must be shared between several builder calls are
//! registered as singletons and fetched with [`WorldGraph::ensure_singleton`].

use std::collections::HashMap;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::location::Location;

/// Index of a location inside its [`WorldGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Locations built once and reused by every caller that asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singleton {
    /// The industrial hub.
    IndustrialPlaza,
    /// The refinery.
    Refinery,
}

/// All locations of one game plus a name index.
#[derive(Debug, Clone, Default)]
pub struct WorldGraph {
    locations: Vec<Location>,
    by_name: HashMap<String, LocationId>,
    singletons: HashMap<Singleton, LocationId>,
}

impl WorldGraph {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Names are unique, ignoring case.
    pub fn allocate(&mut self, location: Location) -> CoreResult<LocationId> {
        let key = location.name().to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(CoreError::DuplicateLocation(location.name().to_string()));
        }
        let id = LocationId(self.locations.len());
        self.by_name.insert(key, id);
        self.locations.push(location);
        Ok(id)
    }

    /// Return the shared instance of `kind`, building it on first request.
    pub fn ensure_singleton<F>(&mut self, kind: Singleton, build: F) -> CoreResult<LocationId>
    where
        F: FnOnce() -> CoreResult<Location>,
    {
        if let Some(&id) = self.singletons.get(&kind) {
            return Ok(id);
        }
        let id = self.allocate(build()?)?;
        self.singletons.insert(kind, id);
        tracing::debug!(?kind, %id, "singleton location created");
        Ok(id)
    }

    /// Id of an already built singleton.
    pub fn singleton(&self, kind: Singleton) -> Option<LocationId> {
        self.singletons.get(&kind).copied()
    }

    /// Wire an exit from `from` to `to`. Repeating a connection is a no-op.
    pub fn connect(&mut self, from: LocationId, label: &str, to: LocationId) -> CoreResult<()> {
        self.location(to)?;
        self.location_mut(from)?.add_exit(label, to);
        Ok(())
    }

    /// Wire exits in both directions.
    pub fn connect_both(
        &mut self,
        a: LocationId,
        a_to_b: &str,
        b: LocationId,
        b_to_a: &str,
    ) -> CoreResult<()> {
        self.connect(a, a_to_b, b)?;
        self.connect(b, b_to_a, a)
    }

    /// Borrow a location.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// Mutably borrow a location.
    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    /// Borrow a location, failing with [`CoreError::UnknownLocation`].
    pub fn location(&self, id: LocationId) -> CoreResult<&Location> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Mutably borrow a location, failing with [`CoreError::UnknownLocation`].
    pub fn location_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.get_mut(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Find a location by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    /// Iterate over `(id, location)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(idx, loc)| (LocationId(idx), loc))
    }

    /// Location names in allocation order.
    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(Location::name).collect()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no location has been allocated.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Validate every location's state graph.
    pub fn validate(&self) -> CoreResult<()> {
        self.locations.iter().try_for_each(Location::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MAIN_STATE;

    #[test]
    fn allocate_and_find() {
        let mut world = WorldGraph::new();
        let a = world.allocate(Location::new("Central Plaza", "")).unwrap();
        assert_eq!(world.find("central plaza"), Some(a));
        assert_eq!(world.find("  CENTRAL PLAZA "), Some(a));
        assert_eq!(world.find("nowhere"), None);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut world = WorldGraph::new();
        world.allocate(Location::new("Refinery", "")).unwrap();
        assert!(matches!(
            world.allocate(Location::new("refinery", "")),
            Err(CoreError::DuplicateLocation(_))
        ));
    }

    #[test]
    fn singleton_is_built_once() {
        let mut world = WorldGraph::new();
        let mut builds = 0;
        let first = world
            .ensure_singleton(Singleton::Refinery, || {
                builds += 1;
                Ok(Location::new("Refinery", ""))
            })
            .unwrap();
        let second = world
            .ensure_singleton(Singleton::Refinery, || {
                builds += 1;
                Ok(Location::new("Refinery", ""))
            })
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(builds, 1);
        assert_eq!(world.singleton(Singleton::Refinery), Some(first));
        assert_eq!(world.singleton(Singleton::IndustrialPlaza), None);
    }

    #[test]
    fn connect_is_idempotent() {
        let mut world = WorldGraph::new();
        let plaza = world.allocate(Location::new("Industrial Plaza", "")).unwrap();
        let refinery = world.allocate(Location::new("Refinery", "")).unwrap();
        for _ in 0..3 {
            world
                .connect_both(plaza, "refinery", refinery, "industrial plaza")
                .unwrap();
        }
        let plaza_loc = world.get(plaza).unwrap();
        assert_eq!(plaza_loc.exit("refinery"), Some(refinery));
        assert_eq!(
            plaza_loc
                .state(MAIN_STATE)
                .unwrap()
                .menu
                .iter()
                .filter(|l| *l == "go refinery")
                .count(),
            1
        );
    }

    #[test]
    fn connect_to_foreign_id_fails() {
        let mut other = WorldGraph::new();
        other.allocate(Location::new("X", "")).unwrap();
        let foreign = other.allocate(Location::new("Y", "")).unwrap();

        let mut world = WorldGraph::new();
        let a = world.allocate(Location::new("A", "")).unwrap();
        assert!(matches!(
            world.connect(a, "y", foreign),
            Err(CoreError::UnknownLocation(_))
        ));
    }

    #[test]
    fn validate_propagates_location_errors() {
        let mut world = WorldGraph::new();
        let id = world.allocate(Location::new("A", "")).unwrap();
        assert!(world.validate().is_ok());
        world
            .location_mut(id)
            .unwrap()
            .add_back_state("loose", "nowhere")
            .unwrap();
        assert!(world.validate().is_err());
    }
}
