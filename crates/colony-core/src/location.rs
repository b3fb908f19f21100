//! Locations and their interaction-state machines.
//!
//! Each location owns a small graph of named interaction states. A state is
//! a menu of action labels plus an optional parent used by "go back". The
//! `main` menu is partly derived: registering an exit, item, NPC or
//! container appends the matching `go`/`take`/`talk to`/`open` label, and
//! removing the thing removes the label again.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CoreError, CoreResult};
use crate::item::ItemRef;
use crate::world::LocationId;

/// Id of the root state every location has.
pub const MAIN_STATE: &str = "main";
/// Id of the state used to show the inventory.
pub const INVENTORY_STATE: &str = "inventory";
/// Label that returns to the parent state.
pub const GO_BACK: &str = "go back";
/// Upper bound on parent-chain walks.
pub const MAX_STATE_DEPTH: usize = 32;

/// How input is interpreted while a state is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Numbers select menu entries.
    #[default]
    Menu,
    /// Raw text is handed to the state's handler.
    FreeText,
}

/// One menu context of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    /// Action labels, shown as numbered choices.
    pub menu: Vec<String>,
    /// State to return to on "go back".
    pub parent: Option<String>,
    /// Input interpretation.
    pub input: InputMode,
}

impl InteractionState {
    fn new(menu: &[&str], parent: Option<&str>) -> Self {
        Self {
            menu: menu.iter().map(|s| (*s).to_string()).collect(),
            parent: parent.map(str::to_string),
            input: InputMode::Menu,
        }
    }
}

/// An exit edge to another location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Label used with `go`.
    pub label: String,
    /// Destination.
    pub target: LocationId,
    /// Hidden exits have no menu entry.
    pub hidden: bool,
}

/// Result of trying to open a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerOpen {
    /// Opened for the first time and it has contents.
    Revealed,
    /// Opened for the first time but nothing inside.
    Empty,
    /// Already opened earlier.
    AlreadyOpen,
    /// No such container here.
    Missing,
}

/// A place in the colony.
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    description: String,
    exits: Vec<Exit>,
    items: Vec<ItemRef>,
    containers: BTreeMap<String, Vec<ItemRef>>,
    opened: BTreeSet<String>,
    npcs: Vec<String>,
    messages: Vec<String>,
    states: BTreeMap<String, InteractionState>,
    current: String,
}

impl Location {
    /// Create a location with only the `main` and `inventory` states.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut states = BTreeMap::new();
        states.insert(MAIN_STATE.to_string(), InteractionState::new(&[], None));
        states.insert(
            INVENTORY_STATE.to_string(),
            InteractionState::new(&[GO_BACK], Some(MAIN_STATE)),
        );
        Self {
            name: name.into(),
            description: description.into(),
            exits: Vec::new(),
            items: Vec::new(),
            containers: BTreeMap::new(),
            opened: BTreeSet::new(),
            npcs: Vec::new(),
            messages: Vec::new(),
            states,
            current: MAIN_STATE.to_string(),
        }
    }

    /// Location name; unique within a world.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base description text.
    pub fn base_description(&self) -> &str {
        &self.description
    }

    // -----------------------------------------------------------------------
    // Interaction states
    // -----------------------------------------------------------------------

    /// Id of the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Whether the active state has this id.
    pub fn in_state(&self, id: &str) -> bool {
        self.current == id
    }

    /// Look up a state by id.
    pub fn state(&self, id: &str) -> Option<&InteractionState> {
        self.states.get(id)
    }

    /// Whether a state with this id exists.
    pub fn has_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Define (or redefine) a state whose parent is `main`.
    pub fn add_state(&mut self, id: &str, menu: &[&str]) -> CoreResult<()> {
        self.add_child_state(id, menu, MAIN_STATE)
    }

    /// Define (or redefine) a state under a specific parent.
    pub fn add_child_state(&mut self, id: &str, menu: &[&str], parent: &str) -> CoreResult<()> {
        if id.trim().is_empty() {
            return Err(CoreError::InvalidArgument(format!(
                "empty state id in {}",
                self.name
            )));
        }
        if id == MAIN_STATE {
            return Err(CoreError::InvalidArgument(format!(
                "the main state of {} cannot be redefined",
                self.name
            )));
        }
        tracing::debug!(location = %self.name, state = id, parent, "added interaction state");
        self.states
            .insert(id.to_string(), InteractionState::new(menu, Some(parent)));
        Ok(())
    }

    /// Define a state whose only action is "go back".
    pub fn add_back_state(&mut self, id: &str, parent: &str) -> CoreResult<()> {
        self.add_child_state(id, &[GO_BACK], parent)
    }

    /// Define a state that takes free text instead of menu numbers.
    pub fn add_free_text_state(&mut self, id: &str) -> CoreResult<()> {
        self.add_child_state(id, &[], MAIN_STATE)?;
        if let Some(state) = self.states.get_mut(id) {
            state.input = InputMode::FreeText;
        }
        Ok(())
    }

    /// Switch to `id`. Unknown ids are logged and fall back to `main`.
    pub fn set_state(&mut self, id: &str) -> bool {
        if self.states.contains_key(id) {
            tracing::info!(location = %self.name, state = id, "state changed");
            self.current = id.to_string();
            true
        } else {
            tracing::error!(location = %self.name, state = id, "unknown interaction state, falling back to main");
            self.current = MAIN_STATE.to_string();
            false
        }
    }

    /// Parent of the active state, or `main` when it has none.
    pub fn parent_of_current(&self) -> &str {
        self.states
            .get(&self.current)
            .and_then(|s| s.parent.as_deref())
            .unwrap_or(MAIN_STATE)
    }

    /// Move to the parent of the active state.
    pub fn go_back(&mut self) {
        let parent = self.parent_of_current().to_string();
        self.set_state(&parent);
    }

    /// Menu of the active state, verbatim.
    pub fn available_actions(&self) -> &[String] {
        self.states
            .get(&self.current)
            .map(|s| s.menu.as_slice())
            .unwrap_or(&[])
    }

    /// Input mode of the active state.
    pub fn input_mode(&self) -> InputMode {
        self.states
            .get(&self.current)
            .map(|s| s.input)
            .unwrap_or_default()
    }

    /// Replace the menu of a state. Returns `false` for unknown ids.
    pub fn set_menu(&mut self, id: &str, menu: Vec<String>) -> bool {
        match self.states.get_mut(id) {
            Some(state) => {
                state.menu = menu;
                true
            }
            None => false,
        }
    }

    /// Append an action to a state unless already present.
    pub fn add_action(&mut self, id: &str, label: &str) -> bool {
        match self.states.get_mut(id) {
            Some(state) if !state.menu.iter().any(|l| l == label) => {
                state.menu.push(label.to_string());
                true
            }
            _ => false,
        }
    }

    /// Insert an action at `index` (clamped) unless already present.
    pub fn insert_action(&mut self, id: &str, index: usize, label: &str) -> bool {
        match self.states.get_mut(id) {
            Some(state) if !state.menu.iter().any(|l| l == label) => {
                let index = index.min(state.menu.len());
                state.menu.insert(index, label.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove the first occurrence of an action.
    pub fn remove_action(&mut self, id: &str, label: &str) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        match state.menu.iter().position(|l| l == label) {
            Some(idx) => {
                state.menu.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether a state's menu contains an action.
    pub fn has_action(&self, id: &str, label: &str) -> bool {
        self.states
            .get(id)
            .is_some_and(|s| s.menu.iter().any(|l| l == label))
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add an exit and its `go <label>` menu entry.
    pub fn add_exit(&mut self, label: &str, target: LocationId) {
        self.put_exit(label, target, false);
        self.add_action(MAIN_STATE, &format!("go {label}"));
    }

    /// Add an exit that has no menu entry.
    pub fn add_hidden_exit(&mut self, label: &str, target: LocationId) {
        self.put_exit(label, target, true);
    }

    fn put_exit(&mut self, label: &str, target: LocationId, hidden: bool) {
        match self.exits.iter_mut().find(|e| e.label == label) {
            Some(exit) => {
                exit.target = target;
                exit.hidden = hidden;
            }
            None => self.exits.push(Exit {
                label: label.to_string(),
                target,
                hidden,
            }),
        }
    }

    /// Destination for an exit label (case-insensitive).
    pub fn exit(&self, label: &str) -> Option<LocationId> {
        let label = label.trim();
        self.exits
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(label))
            .map(|e| e.target)
    }

    /// All exits in registration order.
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    // -----------------------------------------------------------------------
    // Items and containers
    // -----------------------------------------------------------------------

    /// Place an item here and add `take <name>` to the main menu.
    pub fn add_item(&mut self, item: ItemRef) {
        if let Some(state) = self.states.get_mut(MAIN_STATE) {
            state.menu.push(format!("take {}", item.name()));
        }
        self.items.push(item);
    }

    /// Remove one item by name (case-insensitive) with exactly one matching
    /// `take` entry.
    pub fn remove_item(&mut self, name: &str) -> Option<ItemRef> {
        let name = name.trim();
        let idx = self
            .items
            .iter()
            .position(|i| i.name().eq_ignore_ascii_case(name))?;
        let item = self.items.remove(idx);
        self.remove_action(MAIN_STATE, &format!("take {}", item.name()));
        Some(item)
    }

    /// Visible items.
    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }

    /// Find a visible item by name (case-insensitive).
    pub fn find_item(&self, name: &str) -> Option<&ItemRef> {
        let name = name.trim();
        self.items
            .iter()
            .find(|i| i.name().eq_ignore_ascii_case(name))
    }

    /// Hide items in a container and add `open <container>` to the main menu.
    pub fn add_hidden_items(&mut self, container: &str, items: Vec<ItemRef>) -> CoreResult<()> {
        self.containers.insert(container.to_string(), items);
        self.add_action(MAIN_STATE, &format!("open {container}"));
        self.add_state(container, &[GO_BACK])?;
        self.sync_container_menu(container);
        Ok(())
    }

    /// Open a container, revealing its contents the first time.
    pub fn open_container(&mut self, container: &str) -> ContainerOpen {
        let Some(items) = self.containers.get(container) else {
            return ContainerOpen::Missing;
        };
        if self.opened.contains(container) {
            return ContainerOpen::AlreadyOpen;
        }
        let empty = items.is_empty();
        self.opened.insert(container.to_string());
        if empty {
            ContainerOpen::Empty
        } else {
            self.sync_container_menu(container);
            self.set_state(container);
            ContainerOpen::Revealed
        }
    }

    /// Whether the container has been opened.
    pub fn is_opened(&self, container: &str) -> bool {
        self.opened.contains(container)
    }

    /// Items still inside a container.
    pub fn container_items(&self, container: &str) -> &[ItemRef] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find an item in an opened container (case-insensitive).
    pub fn find_in_container(&self, container: &str, name: &str) -> Option<&ItemRef> {
        if !self.opened.contains(container) {
            return None;
        }
        let name = name.trim();
        self.container_items(container)
            .iter()
            .find(|i| i.name().eq_ignore_ascii_case(name))
    }

    /// Take an item out of an opened container and refresh its menu.
    pub fn take_from_container(&mut self, container: &str, name: &str) -> Option<ItemRef> {
        if !self.opened.contains(container) {
            return None;
        }
        let items = self.containers.get_mut(container)?;
        let name = name.trim();
        let idx = items
            .iter()
            .position(|i| i.name().eq_ignore_ascii_case(name))?;
        let item = items.remove(idx);
        self.sync_container_menu(container);
        Some(item)
    }

    fn sync_container_menu(&mut self, container: &str) {
        let mut menu: Vec<String> = self
            .container_items(container)
            .iter()
            .map(|i| format!("take {}", i.name()))
            .collect();
        menu.push(GO_BACK.to_string());
        self.set_menu(container, menu);
    }

    // -----------------------------------------------------------------------
    // NPCs
    // -----------------------------------------------------------------------

    /// Add an NPC and a `talk to <name>` entry, both at most once.
    ///
    /// Safe to call on every visit.
    pub fn add_npc(&mut self, name: &str) {
        if !self.npcs.iter().any(|n| n == name) {
            self.npcs.push(name.to_string());
        }
        self.add_action(MAIN_STATE, &format!("talk to {name}"));
    }

    /// Re-initialization hook run on every visit; only adds what is missing.
    pub fn ensure_npc(&mut self, name: &str) {
        if !self.has_npc(name) {
            tracing::info!(location = %self.name, npc = name, "restoring resident npc");
            self.npcs.push(name.to_string());
        }
        let label = format!("talk to {name}");
        if !self.has_action(MAIN_STATE, &label) {
            self.add_action(MAIN_STATE, &label);
        }
    }

    /// Whether an NPC whose display name contains `name` is present.
    pub fn has_npc(&self, name: &str) -> bool {
        self.npcs.iter().any(|n| n.contains(name))
    }

    /// Replace an NPC's display name with `"<name> <marker>"`.
    pub fn mark_npc(&mut self, name: &str, marker: &str) -> bool {
        match self.npcs.iter_mut().find(|n| n.contains(name)) {
            Some(npc) => {
                *npc = format!("{name} {marker}");
                true
            }
            None => false,
        }
    }

    /// NPC display names.
    pub fn npcs(&self) -> &[String] {
        &self.npcs
    }

    // -----------------------------------------------------------------------
    // Messages
    // -----------------------------------------------------------------------

    /// Queue a message for the next render.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Pending messages without consuming them.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Take all pending messages, leaving the queue empty.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    // -----------------------------------------------------------------------
    // Description and validation
    // -----------------------------------------------------------------------

    /// Heading, base text, visible items and people present.
    pub fn description(&self) -> String {
        let mut parts = vec![format!("=== {} ===", self.name), self.description.clone()];

        let mut visible: Vec<&ItemRef> = self.items.iter().collect();
        if self.opened.contains(&self.current) {
            visible.extend(self.container_items(&self.current));
        }
        if !visible.is_empty() {
            let mut block = String::from("\nItems here:");
            for item in visible {
                block.push_str(&format!("\n- {}", item.name()));
            }
            parts.push(block);
        }

        if !self.npcs.is_empty() {
            let mut block = String::from("\nPeople here:");
            for npc in &self.npcs {
                block.push_str(&format!("\n- {npc}"));
            }
            parts.push(block);
        }

        parts.join("\n")
    }

    /// Number of parent links from `id` up to a root, bounded by
    /// [`MAX_STATE_DEPTH`].
    pub fn state_depth(&self, id: &str) -> CoreResult<usize> {
        let mut depth = 0;
        let mut cursor = self.states.get(id).ok_or_else(|| CoreError::UnknownState {
            location: self.name.clone(),
            state: id.to_string(),
        })?;

        while let Some(parent) = cursor.parent.as_deref() {
            depth += 1;
            if depth > MAX_STATE_DEPTH {
                tracing::warn!(location = %self.name, state = id, "parent chain exceeds depth bound");
                return Err(CoreError::StateCycle {
                    location: self.name.clone(),
                    state: id.to_string(),
                });
            }
            cursor = self.states.get(parent).ok_or_else(|| CoreError::OrphanParent {
                location: self.name.clone(),
                state: id.to_string(),
                parent: parent.to_string(),
            })?;
        }
        Ok(depth)
    }

    /// Check every state's parent exists and every parent chain terminates.
    pub fn validate(&self) -> CoreResult<()> {
        for id in self.states.keys() {
            self.state_depth(id)?;
        }
        Ok(())
    }

    /// Overwrite a state's parent.
    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, id: &str, parent: Option<&str>) -> bool {
        match self.states.get_mut(id) {
            Some(state) => {
                state.parent = parent.map(str::to_string);
                true
            }
            None => false,
        }
    }
}
