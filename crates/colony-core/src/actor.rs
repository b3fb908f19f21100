//! Actor (player) state.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::GameConfig;
use crate::item::{Item, ItemRef};

/// The five NPC storylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quest {
    /// Donations at the memorial pond.
    ForemanLong,
    /// Soil samples for the science officer.
    Ephsus,
    /// Steamed buns for the hungry guard.
    Creedal,
    /// The lost lucky coin.
    Cecil,
    /// Cheering up the new checkpoint officer.
    Weatherbee,
}

impl Quest {
    /// Every quest, in the order the status panel shows them.
    pub const ALL: [Quest; 5] = [
        Quest::Cecil,
        Quest::Creedal,
        Quest::Ephsus,
        Quest::ForemanLong,
        Quest::Weatherbee,
    ];

    /// Full display name of the quest giver.
    pub fn npc_name(self) -> &'static str {
        match self {
            Self::ForemanLong => "Colony Foreman Long",
            Self::Ephsus => "Science Officer Ephsus",
            Self::Creedal => "Security Officer Creedal",
            Self::Cecil => "Greyman Cecil",
            Self::Weatherbee => "Security Officer Weatherbee",
        }
    }

    /// Name the quest giver is referred to by in passing.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::ForemanLong => "Long",
            Self::Ephsus => "Ephsus",
            Self::Creedal => "Creedal",
            Self::Cecil => "Cecil",
            Self::Weatherbee => "Weatherbee",
        }
    }
}

/// One-off market purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Purchase {
    /// Olympus XL Backpack.
    XlBackpack,
    /// Steamed Buns.
    SteamedBuns,
    /// Heavy Beam Mining Gun Upgrade.
    MiningGunUpgrade,
    /// Forged Communications Tower ID Card.
    BlackMarketCard,
}

/// Story progress markers that are not quest completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoryFlag {
    /// Read the job listing naming Weatherbee.
    ReadJobListing,
    /// Congratulated Weatherbee on the new job.
    CongratulatedWeatherbee,
    /// Dug up the skeleton in the mines.
    FoundSkeleton,
    /// The quota celebration has played.
    QuotaCelebrated,
}

/// Mutable record of the player.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    minshin: u32,
    inventory: Vec<ItemRef>,
    inventory_capacity: usize,
    max_resource_stack: usize,
    quota_target: u32,
    quota_fulfilled: u32,
    completed: BTreeSet<Quest>,
    counters: BTreeMap<Quest, u32>,
    purchases: BTreeSet<Purchase>,
    flags: BTreeSet<StoryFlag>,
}

impl Actor {
    /// Create the player as configured for a fresh game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            name: config.player_name.clone(),
            minshin: config.initial_minshin,
            inventory: Vec::new(),
            inventory_capacity: config.inventory_capacity,
            max_resource_stack: config.max_resource_stack,
            quota_target: config.ambrosium_quota,
            quota_fulfilled: 0,
            completed: BTreeSet::new(),
            counters: BTreeMap::new(),
            purchases: BTreeSet::new(),
            flags: BTreeSet::new(),
        }
    }

    /// Player first name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // -----------------------------------------------------------------------
    // Currency
    // -----------------------------------------------------------------------

    /// Minshin balance.
    pub fn minshin(&self) -> u32 {
        self.minshin
    }

    /// Overwrite the balance (debug tooling).
    pub fn set_minshin(&mut self, amount: u32) {
        self.minshin = amount;
    }

    /// Whether the balance covers `amount`.
    pub fn can_afford(&self, amount: u32) -> bool {
        self.minshin >= amount
    }

    /// Deduct `amount`. Rejected without change when the balance is short.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.minshin.checked_sub(amount) {
            Some(rest) => {
                self.minshin = rest;
                true
            }
            None => false,
        }
    }

    /// Credit `amount`.
    pub fn earn(&mut self, amount: u32) {
        self.minshin = self.minshin.saturating_add(amount);
    }

    // -----------------------------------------------------------------------
    // Inventory
    // -----------------------------------------------------------------------

    /// Items held, in pickup order.
    pub fn inventory(&self) -> &[ItemRef] {
        &self.inventory
    }

    /// Number of inventory slots.
    pub fn inventory_capacity(&self) -> usize {
        self.inventory_capacity
    }

    /// Change the slot count. Never shrinks below what is already carried.
    pub fn set_inventory_capacity(&mut self, capacity: usize) {
        self.inventory_capacity = capacity.max(self.inventory.len());
    }

    /// Whether every slot is used.
    pub fn is_inventory_full(&self) -> bool {
        self.inventory.len() >= self.inventory_capacity
    }

    /// Add an item. Fails when the inventory is full or the resource stack is maxed.
    pub fn add_item(&mut self, item: ItemRef) -> bool {
        if item.is_resource() && self.count_of(item.name()) >= self.max_resource_stack {
            return false;
        }
        if self.is_inventory_full() {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Remove one instance of `item`. Permanent key items are never removed.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        if !item.is_removable() {
            return false;
        }
        match self.inventory.iter().position(|held| held.name() == item.name()) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether an item with the same name is held.
    pub fn has_item(&self, item: &Item) -> bool {
        self.has_item_named(item.name())
    }

    /// Whether an item with exactly this name is held.
    pub fn has_item_named(&self, name: &str) -> bool {
        self.inventory.iter().any(|held| held.name() == name)
    }

    /// Find a held item by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<ItemRef> {
        let name = name.trim();
        self.inventory
            .iter()
            .find(|held| held.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// How many items with this exact name are held.
    pub fn count_of(&self, name: &str) -> usize {
        self.inventory
            .iter()
            .filter(|held| held.name() == name)
            .count()
    }

    /// Remove up to `count` removable items named `name`, keeping everything
    /// else in order. Returns how many were removed.
    pub fn remove_count(&mut self, name: &str, count: usize) -> usize {
        let mut removed = 0;
        self.inventory.retain(|held| {
            if removed < count && held.name() == name && held.is_removable() {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove every removable item whose name is in `names`.
    pub fn remove_all_named(&mut self, names: &[&str]) -> usize {
        let before = self.inventory.len();
        self.inventory
            .retain(|held| !(names.contains(&held.name()) && held.is_removable()));
        before - self.inventory.len()
    }

    /// Inventory listing grouped by name in first-pickup order.
    pub fn inventory_summary(&self) -> String {
        if self.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }

        let mut groups: Vec<(&ItemRef, usize)> = Vec::new();
        for held in &self.inventory {
            match groups.iter_mut().find(|(item, _)| item.name() == held.name()) {
                Some((_, count)) => *count += 1,
                None => groups.push((held, 1)),
            }
        }

        let mut out = String::from("Your inventory contains:");
        for (item, count) in groups {
            out.push_str("\n- ");
            out.push_str(item.name());
            if count > 1 {
                out.push_str(&format!(" (x{count})"));
            }
            out.push_str(": ");
            out.push_str(item.description());
        }
        out
    }

    // -----------------------------------------------------------------------
    // Quota
    // -----------------------------------------------------------------------

    /// Ambrosium required this period.
    pub fn quota_target(&self) -> u32 {
        self.quota_target
    }

    /// Ambrosium deposited toward the quota.
    pub fn quota_fulfilled(&self) -> u32 {
        self.quota_fulfilled
    }

    /// Whether the quota has been reached.
    pub fn quota_met(&self) -> bool {
        self.quota_fulfilled >= self.quota_target
    }

    /// Record deposited Ambrosium.
    pub fn add_quota_progress(&mut self, amount: u32) {
        self.quota_fulfilled = self.quota_fulfilled.saturating_add(amount);
    }

    /// Overwrite quota progress (debug tooling).
    pub fn set_quota_fulfilled(&mut self, amount: u32) {
        self.quota_fulfilled = amount;
    }

    // -----------------------------------------------------------------------
    // Quests, purchases and flags
    // -----------------------------------------------------------------------

    /// Mark a quest as complete.
    pub fn complete_quest(&mut self, quest: Quest) {
        self.completed.insert(quest);
    }

    /// Whether a quest is complete.
    pub fn is_quest_complete(&self, quest: Quest) -> bool {
        self.completed.contains(&quest)
    }

    /// Whether all five quests are complete.
    pub fn all_quests_complete(&self) -> bool {
        Quest::ALL.iter().all(|q| self.completed.contains(q))
    }

    /// Progress counter for a quest.
    pub fn quest_counter(&self, quest: Quest) -> u32 {
        self.counters.get(&quest).copied().unwrap_or(0)
    }

    /// Add to a quest counter and return the new value.
    pub fn add_to_quest_counter(&mut self, quest: Quest, amount: u32) -> u32 {
        let counter = self.counters.entry(quest).or_insert(0);
        *counter = counter.saturating_add(amount);
        *counter
    }

    /// Record a purchase.
    pub fn record_purchase(&mut self, purchase: Purchase) {
        self.purchases.insert(purchase);
    }

    /// Whether something was already bought.
    pub fn has_purchased(&self, purchase: Purchase) -> bool {
        self.purchases.contains(&purchase)
    }

    /// Set a story flag.
    pub fn set_flag(&mut self, flag: StoryFlag) {
        self.flags.insert(flag);
    }

    /// Whether a story flag is set.
    pub fn has_flag(&self, flag: StoryFlag) -> bool {
        self.flags.contains(&flag)
    }
}
