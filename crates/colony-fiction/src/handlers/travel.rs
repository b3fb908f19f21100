//! `go`, `go back`, and the checkpoint gates.

use colony_core::item::names;
use colony_core::{GO_BACK, LocationId, MAIN_STATE, Purchase};

use super::{reply, title_case};
use crate::colony::{labels, npcs};
use crate::cue::{AnimationKind, AnimationStep, Cue};
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::state::GameState;

const RESIDENTIAL_GATE_ROUTES: &[&str] = &["industrial sector", "industrial plaza"];
const INDUSTRIAL_GATE_ROUTES: &[&str] = &["residential sector", "central plaza"];
const MAINTAINED_FACILITIES: &[&str] = &["refinery", "deposit station"];

/// Return to the parent of the current interaction state.
pub(crate) fn go_back(state: &mut GameState) -> FictionResult<Flow> {
    state.here_mut()?.go_back();
    reply(state, "You step back.")
}

/// Move through an exit of the current location.
pub(crate) fn go(state: &mut GameState, destination: &str) -> FictionResult<Flow> {
    let destination = destination.trim().to_lowercase();
    if destination == GO_BACK || destination == "back" {
        return go_back(state);
    }

    let places = state.places;
    if state.is_at(places.checkpoint_residential)
        && RESIDENTIAL_GATE_ROUTES.contains(&destination.as_str())
    {
        return pass_gate(
            state,
            places.residential_gate,
            "You scan your ID card. The blast door hisses open, revealing a small security \
             airlock. Creedal nods you through.",
            "You need your ID card to pass. Creedal shakes his head.",
        );
    }
    if state.is_at(places.checkpoint_industrial)
        && INDUSTRIAL_GATE_ROUTES.contains(&destination.as_str())
    {
        return pass_gate(
            state,
            places.industrial_gate,
            "You scan your ID card. The gate slides open. Weatherbee watches you leave \
             without a word.",
            "You need your ID card to pass. Weatherbee holds up a hand to stop you.",
        );
    }

    if destination.is_empty() {
        return reply(state, "Go where?");
    }

    if state.is_at(places.industrial_plaza)
        && MAINTAINED_FACILITIES.contains(&destination.as_str())
        && state.facilities_closed()
    {
        let message = format!(
            "The {} is closed from {}:00-{}:00 for standard maintenance.",
            title_case(&destination),
            state.config.facility_close_hour,
            state.config.facility_open_hour
        );
        return reply(state, message);
    }

    let Some(next) = state.here()?.exit(&destination) else {
        tracing::warn!(%destination, "no such exit");
        return reply(state, format!("There is no way to go '{destination}'!"));
    };

    if let Some(steps) = transit_animation(state, &destination) {
        state.cue(Cue::Animation {
            kind: AnimationKind::Travel,
            steps,
        });
    }

    arrive(state, next)?;
    state.advance(state.config.travel_hours)?;
    Ok(Flow::Continue)
}

fn pass_gate(
    state: &mut GameState,
    airlock: LocationId,
    granted: &str,
    denied: &str,
) -> FictionResult<Flow> {
    if !state.actor.has_item_named(names::ID_CARD) {
        return reply(state, denied);
    }
    state.move_to(airlock)?;
    reply(state, granted)
}

/// Magnotube between the residential entrance and the plaza, and the
/// airlock doors on the far side of each checkpoint.
fn transit_animation(state: &GameState, destination: &str) -> Option<Vec<AnimationStep>> {
    let places = state.places;
    let magnotube = (state.is_at(places.residential_entrance) && destination == "central plaza")
        || (state.is_at(places.central_plaza) && destination.contains("residential"));
    let airlock = (state.is_at(places.residential_gate) && destination.contains("industrial"))
        || (state.is_at(places.industrial_gate) && destination.contains("central"));

    if magnotube {
        Some(vec![
            AnimationStep::new("Waiting for Magnotube...", 1.0),
            AnimationStep::new("Boarding Magnotube...", 1.0),
            AnimationStep::new("En-route...", 1.5),
            AnimationStep::new("Arrived.", 0.5),
        ])
    } else if airlock {
        Some(vec![
            AnimationStep::new("Waiting...", 1.0),
            AnimationStep::new("Waiting some more...", 1.5),
            AnimationStep::new("Doors open.", 0.5),
        ])
    } else {
        None
    }
}

/// Enter `next`, running its arrival hooks first.
fn arrive(state: &mut GameState, next: LocationId) -> FictionResult<()> {
    let places = state.places;
    if next == places.corridor {
        state.place_mut(next)?.ensure_npc(npcs::CECIL);
    }
    if next == places.market && !state.actor.has_purchased(Purchase::BlackMarketCard) {
        let market = state.place_mut(next)?;
        if !market.has_action(MAIN_STATE, labels::BLACK_MARKET_STALL) {
            market.add_action(MAIN_STATE, labels::BLACK_MARKET_STALL);
        }
    }
    state.move_to(next)
}
