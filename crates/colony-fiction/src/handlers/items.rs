//! Inventory verbs: take, drop, inventory, open.

use colony_core::{ContainerOpen, INVENTORY_STATE, ItemKind, MAIN_STATE};

use super::reply;
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::state::GameState;

/// Pick up an item from an open container or the floor.
pub(crate) fn take(state: &mut GameState, name: &str) -> FictionResult<Flow> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return reply(state, "Take what?");
    }

    let here = state.here()?;
    let container = here.current_state().to_string();
    if here.is_opened(&container) {
        return take_from_container(state, &container, &name);
    }

    let Some(item) = state.here()?.find_item(&name).cloned() else {
        return reply(state, format!("There is no {name} here to take."));
    };
    if !state.actor.add_item(item.clone()) {
        return reply(state, "Your inventory is full.");
    }
    state.here_mut()?.remove_item(item.name());
    tracing::info!(item = item.name(), "item picked up");
    reply(state, format!("You picked up the {}.", item.name()))
}

fn take_from_container(
    state: &mut GameState,
    container: &str,
    name: &str,
) -> FictionResult<Flow> {
    let Some(item) = state.here()?.find_in_container(container, name).cloned() else {
        return reply(state, format!("There is no '{name}' in the {container}."));
    };
    if !state.actor.add_item(item.clone()) {
        return reply(state, "Your inventory is full.");
    }

    let here = state.here_mut()?;
    here.take_from_container(container, item.name());
    here.push_message(format!("You took the {}.", item.name()));
    if here.container_items(container).is_empty() {
        here.push_message(format!("The {container} is now empty."));
        here.set_state(MAIN_STATE);
    }
    tracing::info!(item = item.name(), container, "item taken from container");
    Ok(Flow::Continue)
}

/// Put a held item down at the current location.
pub(crate) fn drop(state: &mut GameState, name: &str) -> FictionResult<Flow> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return reply(state, "Drop what?");
    }
    let Some(item) = state.actor.find_by_name(&name) else {
        return reply(state, format!("You don't have a {name}."));
    };
    if item.kind() == ItemKind::KeyItem {
        return reply(state, "You should probably hold on to this.");
    }
    if state.actor.remove_item(&item) {
        let message = format!("You dropped the {}.", item.name());
        state.here_mut()?.add_item(item);
        state.say(message)?;
    }
    Ok(Flow::Continue)
}

/// Show the inventory and switch to its menu.
pub(crate) fn inventory(state: &mut GameState) -> FictionResult<Flow> {
    let summary = state.actor.inventory_summary();
    let here = state.here_mut()?;
    here.push_message(summary);
    here.set_state(INVENTORY_STATE);
    Ok(Flow::Continue)
}

/// Open a container at the current location.
pub(crate) fn open(state: &mut GameState, container: &str) -> FictionResult<Flow> {
    let container = container.trim().to_lowercase();
    if container.is_empty() {
        return reply(state, "Open what?");
    }
    let message = match state.here_mut()?.open_container(&container) {
        ContainerOpen::Revealed => format!("The {container}'s contents have made themselves known."),
        ContainerOpen::Empty => "It's empty.".to_string(),
        ContainerOpen::AlreadyOpen => format!("You already opened the {container}."),
        ContainerOpen::Missing => format!("You can't open the {container}."),
    };
    reply(state, message)
}
