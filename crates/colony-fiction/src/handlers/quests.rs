//! The five quest lines and their dialogue steps.

use colony_core::item::names;
use colony_core::{LocationId, MAIN_STATE, Quest, StoryFlag};

use super::{NONSENSE, reply};
use crate::colony::{Places, labels, states};
use crate::cue::Cue;
use crate::ending::{Ending, Flow};
use crate::error::FictionResult;
use crate::narrative;
use crate::state::GameState;

fn home(quest: Quest, places: &Places) -> LocationId {
    match quest {
        Quest::Cecil => places.corridor,
        Quest::Ephsus => places.central_plaza,
        Quest::Creedal => places.checkpoint_residential,
        Quest::Weatherbee => places.checkpoint_industrial,
        Quest::ForemanLong => places.pond,
    }
}

fn thanks(quest: Quest) -> &'static str {
    match quest {
        Quest::Cecil => narrative::CECIL_THANKS,
        Quest::Ephsus => narrative::EPHSUS_THANKS,
        Quest::Creedal => narrative::CREEDAL_THANKS,
        Quest::Weatherbee => narrative::WEATHERBEE_THANKS,
        Quest::ForemanLong => narrative::FOREMAN_THANKS,
    }
}

/// Finish a quest: consume the item, mark the giver, thank the player, and
/// end the game if it was the last one.
fn complete(state: &mut GameState, quest: Quest, consume: Option<&str>) -> FictionResult<Flow> {
    if let Some(name) = consume {
        let item = state.item(name)?;
        state.actor.remove_item(&item);
    }
    state.actor.complete_quest(quest);
    tracing::info!(?quest, "quest completed");

    let npc = quest.npc_name();
    let home = home(quest, &state.places);
    if !state.place_mut(home)?.mark_npc(npc, "✓") {
        tracing::warn!(npc, "quest giver missing from home location");
    }
    state.cue(Cue::Appreciation {
        npc: npc.to_string(),
        message: thanks(quest).to_string(),
    });

    if state.actor.all_quests_complete() {
        tracing::info!("all quests complete");
        return Ok(Flow::Finished(Ending::Good));
    }
    state.enter_state(MAIN_STATE)?;
    Ok(Flow::Continue)
}

/// Show `message` and move to `next` when the player is in `required`.
fn step(
    state: &mut GameState,
    required: &str,
    message: &str,
    next: Option<&str>,
) -> FictionResult<Flow> {
    if !state.in_state(required) {
        return reply(state, NONSENSE);
    }
    let here = state.here_mut()?;
    here.push_message(message);
    if let Some(next) = next {
        here.set_state(next);
    }
    Ok(Flow::Continue)
}

/// Put `label` first on `prompt`'s menu when `offer` holds, otherwise drop it.
fn offer_if(state: &mut GameState, prompt: &str, label: &str, offer: bool) -> FictionResult<()> {
    let here = state.here_mut()?;
    here.remove_action(prompt, label);
    if offer {
        here.insert_action(prompt, 0, label);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Greyman Cecil
// ---------------------------------------------------------------------------

pub(crate) fn ask_about_cecil(state: &mut GameState) -> FictionResult<Flow> {
    step(
        state,
        states::CECIL_TALK,
        narrative::CECIL_INFO,
        Some(states::CECIL_INFO),
    )
}

pub(crate) fn ask_cecil_alright(state: &mut GameState) -> FictionResult<Flow> {
    step(
        state,
        states::CECIL_TALK,
        narrative::CECIL_ALRIGHT,
        Some(states::CECIL_ALRIGHT),
    )
}

pub(crate) fn ask_cecil_sure_alright(state: &mut GameState) -> FictionResult<Flow> {
    let flow = step(
        state,
        states::CECIL_ALRIGHT,
        narrative::CECIL_LOST_COIN,
        Some(states::CECIL_QUEST_PROMPT),
    )?;
    if state.in_state(states::CECIL_QUEST_PROMPT) {
        let carrying = state.actor.has_item_named(names::LUCKY_COIN);
        offer_if(state, states::CECIL_QUEST_PROMPT, labels::OFFER_LUCKY_COIN, carrying)?;
    }
    Ok(flow)
}

pub(crate) fn offer_lucky_coin(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::CECIL_QUEST_PROMPT) {
        return reply(state, NONSENSE);
    }
    if !state.actor.has_item_named(names::LUCKY_COIN) {
        return reply(state, "You don't have the lucky coin to offer.");
    }
    complete(state, Quest::Cecil, Some(names::LUCKY_COIN))
}

// ---------------------------------------------------------------------------
// Science Officer Ephsus
// ---------------------------------------------------------------------------

pub(crate) fn ask_ephsus_soil(state: &mut GameState) -> FictionResult<Flow> {
    step(state, states::EPHSUS_INITIAL, narrative::EPHSUS_SOIL, None)
}

pub(crate) fn ask_ephsus_contemplating(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::EPHSUS_INITIAL) {
        return reply(state, NONSENSE);
    }
    if state.actor.is_quest_complete(Quest::Ephsus) {
        return reply(state, "Thanks to you, my audit is going smoothly!");
    }
    let message = format!(
        "I've got to submit my Thebian ground soil audit in the next {} days but that blasted \
         security officer wont let me through without my ID. *Ephsus shakes her head and looks \
         down*. You couldn't get me samples could you? I need {} samples of ground soil",
        state.config.quota_period_days, state.config.soil_samples_required
    );
    step(
        state,
        states::EPHSUS_INITIAL,
        &message,
        Some(states::EPHSUS_QUEST_PROMPT),
    )
}

/// Hand over as many soil samples as Ephsus still needs.
pub(crate) fn offer_ground_soil(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::EPHSUS_QUEST_PROMPT) {
        return reply(state, NONSENSE);
    }
    let carried = state.actor.count_of(names::GROUND_SOIL);
    if carried == 0 {
        return reply(
            state,
            "You have no Thebian Ground Soil in your inventory. Ephsus looks at you with \
             anticipation.",
        );
    }

    let required = state.config.soil_samples_required;
    let given_so_far = state.actor.quest_counter(Quest::Ephsus);
    let needed = required.saturating_sub(given_so_far) as usize;
    let removed = state.actor.remove_count(names::GROUND_SOIL, carried.min(needed));
    let given = state
        .actor
        .add_to_quest_counter(Quest::Ephsus, u32::try_from(removed).unwrap_or(u32::MAX));
    tracing::info!(removed, given, required, "soil handed to Ephsus");

    if given >= required {
        return complete(state, Quest::Ephsus, None);
    }
    let message = format!(
        "You gave Ephsus {removed} Thebian Ground Soil samples. Just {} more to go. Thank you \
         very much {}. I appreciate that massively.",
        required - given,
        state.actor.name()
    );
    reply(state, message)
}

// ---------------------------------------------------------------------------
// Security Officer Creedal
// ---------------------------------------------------------------------------

pub(crate) fn ask_creedal_industrial(state: &mut GameState) -> FictionResult<Flow> {
    step(state, states::CREEDAL_TALK, narrative::CREEDAL_INDUSTRIAL, None)
}

pub(crate) fn ask_creedal_drooling(state: &mut GameState) -> FictionResult<Flow> {
    let flow = step(
        state,
        states::CREEDAL_TALK,
        narrative::CREEDAL_HUNGRY,
        Some(states::CREEDAL_QUEST_PROMPT),
    )?;
    if state.in_state(states::CREEDAL_QUEST_PROMPT) {
        let carrying = state.actor.has_item_named(names::STEAMED_BUNS);
        offer_if(
            state,
            states::CREEDAL_QUEST_PROMPT,
            labels::OFFER_STEAMED_BUNS,
            carrying,
        )?;
    }
    Ok(flow)
}

pub(crate) fn stay_strong_creed(state: &mut GameState) -> FictionResult<Flow> {
    step(state, states::CREEDAL_QUEST_PROMPT, "He said \"yeah\"", None)
}

pub(crate) fn offer_steamed_buns(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::CREEDAL_QUEST_PROMPT) {
        return reply(state, NONSENSE);
    }
    if !state.actor.has_item_named(names::STEAMED_BUNS) {
        return reply(state, "You don't have Steamed Buns to offer.");
    }
    complete(state, Quest::Creedal, Some(names::STEAMED_BUNS))
}

// ---------------------------------------------------------------------------
// Security Officer Weatherbee
// ---------------------------------------------------------------------------

pub(crate) fn ask_weatherbee_residential(state: &mut GameState) -> FictionResult<Flow> {
    step(
        state,
        states::WEATHERBEE_TALK,
        narrative::WEATHERBEE_RESIDENTIAL,
        None,
    )
}

pub(crate) fn congratulate_weatherbee(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.checkpoint_industrial)
        || !state.actor.has_flag(StoryFlag::ReadJobListing)
    {
        return reply(state, NONSENSE);
    }
    if state.actor.has_flag(StoryFlag::CongratulatedWeatherbee) {
        return reply(state, "\"Thank you again!\" he says, beaming.");
    }
    state.actor.set_flag(StoryFlag::CongratulatedWeatherbee);
    tracing::info!("weatherbee congratulated");
    reply(state, narrative::WEATHERBEE_GIDDY)
}

pub(crate) fn ask_weatherbee_spirits(state: &mut GameState) -> FictionResult<Flow> {
    let ready = state.is_at(state.places.checkpoint_industrial)
        && state.actor.has_flag(StoryFlag::CongratulatedWeatherbee)
        && !state.actor.is_quest_complete(Quest::Weatherbee)
        && state.facilities_closed();
    if !ready {
        return reply(state, "That doesn't make sense right now. Maybe ask him later?");
    }
    let here = state.here_mut()?;
    here.push_message(narrative::WEATHERBEE_SLUMP);
    here.set_state(states::WEATHERBEE_SPIRITS_PROMPT);
    Ok(Flow::Continue)
}

pub(crate) fn high_five_weatherbee(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::WEATHERBEE_SPIRITS_PROMPT) {
        return reply(state, NONSENSE);
    }
    complete(state, Quest::Weatherbee, None)
}

// ---------------------------------------------------------------------------
// Colony Foreman Long
// ---------------------------------------------------------------------------

/// Whether Long is at the pond and still waiting to thank the player.
pub(crate) fn long_is_waiting(state: &GameState) -> bool {
    state.is_at(state.places.pond)
        && !state.actor.is_quest_complete(Quest::ForemanLong)
        && state
            .here()
            .is_ok_and(|pond| pond.has_npc(Quest::ForemanLong.npc_name()))
}

/// Talking to Long after he turns up completes his quest.
pub(crate) fn complete_long(state: &mut GameState) -> FictionResult<Flow> {
    complete(state, Quest::ForemanLong, None)
}
