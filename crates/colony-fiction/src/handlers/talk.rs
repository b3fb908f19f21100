//! `talk to <npc>` and the conversation menus it opens.

use colony_core::{Quest, StoryFlag};

use super::{quests, reply};
use crate::colony::{labels, states};
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::state::GameState;

/// Lowercase fragment that identifies each quest giver in typed input.
fn keyword(quest: Quest) -> &'static str {
    match quest {
        Quest::Cecil => "greyman cecil",
        Quest::Ephsus => "ephsus",
        Quest::Creedal => "creedal",
        Quest::Weatherbee => "weatherbee",
        Quest::ForemanLong => "colony foreman long",
    }
}

/// Start a conversation with an NPC at the current location.
pub(crate) fn talk(state: &mut GameState, target: &str) -> FictionResult<Flow> {
    let target = target.trim().to_lowercase();
    let target = target.strip_prefix("to ").unwrap_or(&target).trim().to_string();
    if target.is_empty() {
        return reply(state, "Talk to who?");
    }

    let quest = Quest::ALL
        .into_iter()
        .find(|quest| target.contains(keyword(*quest)));
    let Some(quest) = quest.filter(|q| state.here().is_ok_and(|loc| loc.has_npc(q.npc_name())))
    else {
        return reply(
            state,
            format!("You try talking to {target}, but don't know where to start."),
        );
    };

    if state.actor.is_quest_complete(quest) {
        return reply(
            state,
            format!("'{}'s respect for you is almost palpable.'", quest.short_name()),
        );
    }

    match quest {
        Quest::Cecil => open_conversation(state, states::CECIL_TALK, "You approach Greyman Cecil."),
        Quest::Ephsus => open_conversation(
            state,
            states::EPHSUS_INITIAL,
            "You approach Science Officer Ephsus.",
        ),
        Quest::Creedal => open_conversation(
            state,
            states::CREEDAL_TALK,
            "You approach Security Officer Creedal.",
        ),
        Quest::Weatherbee => {
            rebuild_weatherbee_menu(state)?;
            open_conversation(
                state,
                states::WEATHERBEE_TALK,
                "You approach the stern-faced Security Officer Weatherbee.",
            )
        }
        Quest::ForemanLong => quests::complete_long(state),
    }
}

fn open_conversation(state: &mut GameState, id: &str, greeting: &str) -> FictionResult<Flow> {
    let here = state.here_mut()?;
    here.push_message(greeting);
    here.set_state(id);
    Ok(Flow::Continue)
}

/// Offer at most one Weatherbee topic, depending on story progress and the
/// time of day.
fn rebuild_weatherbee_menu(state: &mut GameState) -> FictionResult<()> {
    let slump = state.actor.has_flag(StoryFlag::CongratulatedWeatherbee)
        && !state.actor.is_quest_complete(Quest::Weatherbee)
        && state.facilities_closed();
    let read_listing = state.actor.has_flag(StoryFlag::ReadJobListing);

    let here = state.here_mut()?;
    here.remove_action(states::WEATHERBEE_TALK, labels::CONGRATULATE);
    here.remove_action(states::WEATHERBEE_TALK, labels::SPIRITS);
    if slump {
        here.insert_action(states::WEATHERBEE_TALK, 0, labels::SPIRITS);
    } else if read_listing {
        here.insert_action(states::WEATHERBEE_TALK, 0, labels::CONGRATULATE);
    }
    Ok(())
}
