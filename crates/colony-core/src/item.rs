//! Item definitions and the catalog that owns them.
//!
//! Items are immutable once registered. Everything else in the game holds
//! shared [`ItemRef`] handles into the catalog rather than owned copies.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Shared handle to a registered item.
pub type ItemRef = Arc<Item>;

/// Well-known item names.
pub mod names {
    /// Colony identification card.
    pub const ID_CARD: &str = "ID card";
    /// Standard-issue mining gun.
    pub const MINING_GUN: &str = "mining gun";
    /// Greyman Cecil's lost coin.
    pub const LUCKY_COIN: &str = "lucky coin";
    /// Steamed buns from the market.
    pub const STEAMED_BUNS: &str = "Steamed Buns";
    /// Forged card sold on the black market.
    pub const TOWER_ID_CARD: &str = "Communications Tower ID Card";
    /// A single Ambrosium crystal.
    pub const AMBROSIUM_CRYSTAL: &str = "Ambrosium Crystal";
    /// Common soil.
    pub const GROUND_SOIL: &str = "Thebian Ground Soil";
    /// Clagnum putty.
    pub const CLAGNUM_PUTTY: &str = "Clagnum Putty";
    /// Matterstone ore.
    pub const MATTERSTONE_ORE: &str = "Matterstone Ore";
    /// A cluster of Ambrosium crystals.
    pub const AMBROSIUM_CLUSTER: &str = "Ambrosium Cluster";
}

/// Key items that may leave the inventory once picked up.
pub const REMOVABLE_KEY_ITEMS: &[&str] = &[
    names::STEAMED_BUNS,
    names::LUCKY_COIN,
    names::TOWER_ID_CARD,
];

/// Broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Story-critical item; only a few may ever be removed.
    KeyItem,
    /// Mined material that stacks up to a fixed limit.
    Resource,
    /// Single-use item.
    Consumable,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyItem => write!(f, "key item"),
            Self::Resource => write!(f, "resource"),
            Self::Consumable => write!(f, "consumable"),
        }
    }
}

/// An immutable item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    description: String,
    kind: ItemKind,
}

impl Item {
    /// Create an item definition. The name must not be blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
    ) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::InvalidArgument(
                "item name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            description: description.into(),
            kind,
        })
    }

    /// Item name, unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor text shown in the inventory.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Item category.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Whether the item stacks as a resource.
    pub fn is_resource(&self) -> bool {
        self.kind == ItemKind::Resource
    }

    /// Whether the item may be dropped or consumed once held.
    pub fn is_removable(&self) -> bool {
        self.kind != ItemKind::KeyItem || REMOVABLE_KEY_ITEMS.contains(&self.name.as_str())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const STANDARD_ITEMS: &[(&str, &str, ItemKind)] = &[
    (
        names::ID_CARD,
        "Your colony identification card.",
        ItemKind::KeyItem,
    ),
    (
        names::MINING_GUN,
        "Standard-issue mining tool for extracting Ambrosium.",
        ItemKind::KeyItem,
    ),
    (
        names::LUCKY_COIN,
        "A worn coin with what seems to be a clover minted upon it.",
        ItemKind::KeyItem,
    ),
    (
        names::STEAMED_BUNS,
        "a set of delicous steamed buns. Who knows whats inside",
        ItemKind::KeyItem,
    ),
    (
        names::TOWER_ID_CARD,
        "An ID card that might grant access to restricted areas. The quality is questionable.",
        ItemKind::KeyItem,
    ),
    (
        names::AMBROSIUM_CRYSTAL,
        "Why you are here",
        ItemKind::Resource,
    ),
    (
        names::GROUND_SOIL,
        "Common soil from the mines of Thebes.",
        ItemKind::Resource,
    ),
    (
        names::CLAGNUM_PUTTY,
        "A sticky substance found in the mines.",
        ItemKind::Resource,
    ),
    (
        names::MATTERSTONE_ORE,
        "A rare ore with unique properties.",
        ItemKind::Resource,
    ),
    (
        names::AMBROSIUM_CLUSTER,
        "A cluster of Ambrosium crystals.",
        ItemKind::Resource,
    ),
];

/// Registry of item definitions, keyed by exact name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemRef>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The colony's standard item set.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (name, description, kind) in STANDARD_ITEMS {
            catalog.insert(Item {
                name: (*name).to_string(),
                description: (*description).to_string(),
                kind: *kind,
            });
        }
        catalog
    }

    /// Register a new item. Names must be unique.
    pub fn register(&mut self, item: Item) -> CoreResult<ItemRef> {
        if self.by_name.contains_key(item.name()) {
            return Err(CoreError::DuplicateItem(item.name().to_string()));
        }
        Ok(self.insert(item))
    }

    fn insert(&mut self, item: Item) -> ItemRef {
        let item = Arc::new(item);
        self.by_name.insert(item.name.clone(), self.items.len());
        self.items.push(Arc::clone(&item));
        item
    }

    /// Look up an item by exact name.
    pub fn get(&self, name: &str) -> Option<ItemRef> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.items.get(idx))
            .cloned()
    }

    /// Look up an item by exact name, failing with [`CoreError::UnknownItem`].
    pub fn require(&self, name: &str) -> CoreResult<ItemRef> {
        self.get(name)
            .ok_or_else(|| CoreError::UnknownItem(name.to_string()))
    }

    /// Case-insensitive lookup, used by debug tooling.
    pub fn find_ignore_case(&self, name: &str) -> Option<ItemRef> {
        let name = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Iterate over all items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRef> {
        self.items.iter()
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_contents() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 10);
        let card = catalog.get(names::ID_CARD).unwrap();
        assert_eq!(card.kind(), ItemKind::KeyItem);
        assert_eq!(card.description(), "Your colony identification card.");
        assert!(catalog.get(names::GROUND_SOIL).unwrap().is_resource());
    }

    #[test]
    fn lookup_is_exact() {
        let catalog = Catalog::standard();
        assert!(catalog.get("id card").is_none());
        assert!(catalog.get(names::ID_CARD).is_some());
    }

    #[test]
    fn find_ignore_case() {
        let catalog = Catalog::standard();
        let item = catalog.find_ignore_case("  ambrosium CRYSTAL ").unwrap();
        assert_eq!(item.name(), names::AMBROSIUM_CRYSTAL);
        assert!(catalog.find_ignore_case("golden goose").is_none());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Item::new("", "nothing", ItemKind::Consumable).is_err());
        assert!(Item::new("   ", "nothing", ItemKind::Consumable).is_err());
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut catalog = Catalog::standard();
        let dup = Item::new(names::LUCKY_COIN, "again", ItemKind::KeyItem).unwrap();
        assert!(matches!(
            catalog.register(dup),
            Err(CoreError::DuplicateItem(_))
        ));
        let ration = Item::new("Ration Pack", "Dry.", ItemKind::Consumable).unwrap();
        let handle = catalog.register(ration).unwrap();
        assert_eq!(catalog.get("Ration Pack").unwrap(), handle);
    }

    #[test]
    fn require_unknown_item() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.require("Moon Dust"),
            Err(CoreError::UnknownItem(_))
        ));
    }

    #[test]
    fn removable_rules() {
        let catalog = Catalog::standard();
        assert!(!catalog.get(names::ID_CARD).unwrap().is_removable());
        assert!(!catalog.get(names::MINING_GUN).unwrap().is_removable());
        assert!(catalog.get(names::LUCKY_COIN).unwrap().is_removable());
        assert!(catalog.get(names::STEAMED_BUNS).unwrap().is_removable());
        assert!(catalog.get(names::TOWER_ID_CARD).unwrap().is_removable());
        assert!(catalog.get(names::CLAGNUM_PUTTY).unwrap().is_removable());
    }
}
