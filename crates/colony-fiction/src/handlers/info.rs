//! Looking, reading, help and the map.

use colony_core::StoryFlag;

use super::reply;
use crate::colony::states;
use crate::cue::Cue;
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::narrative;
use crate::state::GameState;

pub(crate) fn look(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return reply(state, "Look at what?");
    }
    if target == "bulletin board" || target == "at bulletin board" {
        if !state.is_at(state.places.residential_entrance) {
            return reply(state, "There is no bulletin board here.");
        }
        let here = state.here_mut()?;
        here.set_state(states::BULLETIN_BOARD);
        here.push_message("You look at the bulletin board.");
        return Ok(Flow::Continue);
    }
    reply(state, format!("You see nothing special about the {target}."))
}

/// Read a bulletin board notice or the memorial plaque.
pub(crate) fn read(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return reply(state, "Read what?");
    }

    if state.in_state(states::BULLETIN_BOARD) {
        let notice = if target.contains("quota increase") {
            narrative::NOTICE_QUOTA
        } else if target.contains("oxygen generators") {
            narrative::NOTICE_OXYGEN
        } else if target.contains("job listings") {
            state.actor.set_flag(StoryFlag::ReadJobListing);
            tracing::info!("job listing read");
            narrative::NOTICE_JOBS
        } else if target.contains("advert for a vendor") {
            narrative::NOTICE_ADVERT
        } else {
            return reply(
                state,
                format!("There is no notice about '{target}' on the board."),
            );
        };
        return reply(state, notice);
    }

    if target.contains("plaque") && state.is_at(state.places.pond) {
        let here = state.here_mut()?;
        here.push_message(narrative::PLAQUE);
        here.set_state(states::READ_PLAQUE);
        return Ok(Flow::Continue);
    }
    reply(
        state,
        format!("You can't find anything called '{target}' to read here."),
    )
}

pub(crate) fn investigate(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    if target.is_empty() {
        return reply(state, "Investigate what?");
    }
    reply(state, format!("You're not sure how to investigate {target}."))
}

/// Plain `donate` points at the pond terminal.
pub(crate) fn donate_hint(state: &mut GameState) -> FictionResult<Flow> {
    reply(
        state,
        "Donations are handled via the 'donate minshin into donation terminal' option at the \
         Memorial Pond.",
    )
}

pub(crate) fn help(state: &mut GameState) -> FictionResult<Flow> {
    reply(state, narrative::HELP_TEXT)
}

pub(crate) fn map(state: &mut GameState) -> FictionResult<Flow> {
    let location = state.here()?.name().to_string();
    state.cue(Cue::ShowMap { location });
    Ok(Flow::Continue)
}
