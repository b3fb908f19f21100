//! The home terminal, the tower terminal, card slots and handbooks.

use colony_core::item::names;
use colony_core::{GO_BACK, MAIN_STATE};

use super::{mining, reply};
use crate::colony::states;
use crate::cue::{AnimationKind, AnimationStep, Cue};
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::narrative;
use crate::state::GameState;

const NOT_AT_TERMINAL: &str = "You need to be at the terminal.";

// ---------------------------------------------------------------------------
// Home terminal
// ---------------------------------------------------------------------------

/// `check <thing>`; only the home terminal can be checked.
pub(crate) fn check(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return reply(state, "Check what?");
    }
    if target == "terminal" && state.is_at(state.places.quarters) {
        let here = state.here_mut()?;
        here.set_state(states::TERMINAL);
        here.push_message("You access the terminal.");
        return Ok(Flow::Continue);
    }
    reply(state, format!("You can't check a {target} here."))
}

pub(crate) fn weekly_quota(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::TERMINAL) {
        return reply(state, NOT_AT_TERMINAL);
    }
    let actor = &state.actor;
    let days = state.clock.day();
    let message = format!(
        "Current Quota: {}/{} Ambrosium Crystals. Days passed: {days}. You need {} more in {} days.",
        actor.quota_fulfilled(),
        actor.quota_target(),
        actor.quota_target().saturating_sub(actor.quota_fulfilled()),
        state.config.quota_period_days.saturating_sub(days),
    );
    reply(state, message)
}

pub(crate) fn news(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::TERMINAL) {
        return reply(state, NOT_AT_TERMINAL);
    }
    reply(state, narrative::TERMINAL_NEWS)
}

pub(crate) fn personal_information(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::TERMINAL) {
        return reply(state, NOT_AT_TERMINAL);
    }
    let here = state.here_mut()?;
    here.set_state(states::PERSONAL_INFO);
    here.push_message("Please insert your ID card to view personal information.");
    Ok(Flow::Continue)
}

// ---------------------------------------------------------------------------
// Card slots
// ---------------------------------------------------------------------------

/// `insert <card>` into whatever slot the current state offers.
pub(crate) fn insert(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return reply(state, "Insert what?");
    }
    if target != "id card" {
        return reply(state, format!("You can't insert a {target}."));
    }
    if !state.actor.has_item_named(names::ID_CARD) {
        return reply(state, "You don't have an ID card.");
    }

    if state.in_state(states::PERSONAL_INFO) {
        let file = format!(
            "Accessing Personnel File...\nName: {} Gold\nYears Served: 97\nPosition: Ambrosium \
             Miner\nStatus: Active\nMinshin Balance: {}",
            state.actor.name(),
            state.actor.minshin()
        );
        let here = state.here_mut()?;
        here.set_state(states::VIEWING_INFO);
        here.push_message(file);
    } else if state.in_state(states::DEPOSIT_PROMPT) {
        mining::deposit_ambrosium(state)?;
        state.enter_state(MAIN_STATE)?;
    } else if state.in_state(states::REFINERY_PROMPT) {
        mining::deposit_materials(state)?;
        state.enter_state(MAIN_STATE)?;
    } else {
        state.say("There's nowhere to insert that here.")?;
    }
    Ok(Flow::Continue)
}

// ---------------------------------------------------------------------------
// Communications tower
// ---------------------------------------------------------------------------

pub(crate) fn approach_tower_terminal(state: &mut GameState) -> FictionResult<Option<Flow>> {
    if !state.is_at(state.places.tower) {
        return Ok(None);
    }
    let mut menu = vec!["insert ID card".to_string()];
    if state.actor.has_item_named(names::TOWER_ID_CARD) {
        menu.push(format!("insert {}", names::TOWER_ID_CARD));
    }
    menu.push(GO_BACK.to_string());

    let here = state.here_mut()?;
    here.set_state(states::APPROACHING_TERMINAL);
    here.set_menu(states::APPROACHING_TERMINAL, menu);
    here.push_message("The terminal's green text prompts you to enter your ID card");
    Ok(Some(Flow::Continue))
}

/// The player's own card is never enough for the tower.
pub(crate) fn insert_id_card_at_tower(state: &mut GameState) -> FictionResult<Option<Flow>> {
    if !state.is_at(state.places.tower) {
        return Ok(None);
    }
    let message = if state.actor.has_item_named(names::ID_CARD) {
        "The terminal blinked and displayed: 'Access Denied'."
    } else {
        "You have no ID card to insert"
    };
    reply(state, message).map(Some)
}

/// The forged card is detected and confiscated.
pub(crate) fn insert_tower_card(state: &mut GameState) -> FictionResult<Option<Flow>> {
    if !state.is_at(state.places.tower) {
        return Ok(None);
    }
    let Some(card) = state.actor.find_by_name(names::TOWER_ID_CARD) else {
        return reply(state, "You have no Communications Tower ID Card to insert").map(Some);
    };

    state.cue(Cue::Animation {
        kind: AnimationKind::Terminal,
        steps: vec![
            AnimationStep::new("Scanning card...", 1.0),
            AnimationStep::new("Scan Complete", 0.5),
            AnimationStep::new("Forgery Detected", 0.5),
            AnimationStep::new("Removing Card from Circulation", 1.0),
            AnimationStep::new("Have a great day.", 0.5),
        ],
    });
    state.actor.remove_item(&card);
    tracing::info!("forged tower card confiscated");
    state.enter_state(MAIN_STATE)?;
    Ok(Some(Flow::Continue))
}

// ---------------------------------------------------------------------------
// Handbooks
// ---------------------------------------------------------------------------

/// Which handbook a `view ... handbook` phrase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handbook {
    Mining,
    Refinery,
    Deposit,
}

/// Read a handbook where it is kept.
pub(crate) fn handbook(state: &mut GameState, book: Handbook) -> FictionResult<Option<Flow>> {
    let places = state.places;
    let (place, text) = match book {
        Handbook::Mining => (places.mine, narrative::HANDBOOK_MINING),
        Handbook::Refinery => (places.refinery, narrative::HANDBOOK_REFINERY),
        Handbook::Deposit => (places.deposit_station, narrative::HANDBOOK_DEPOSIT),
    };
    if !state.is_at(place) {
        return Ok(None);
    }
    reply(state, text).map(Some)
}
