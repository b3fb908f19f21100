//! Route a classified [`Command`] to its handler.

use crate::ending::Flow;
use crate::error::FictionResult;
use crate::handlers::economy::StallItem;
use crate::handlers::terminals::Handbook;
use crate::handlers::{
    debug, economy, info, items, mining, quests, talk, terminals, travel,
};
use crate::parser::{Command, Phrase, Verb, suggest_action};
use crate::state::GameState;

/// Run one command against the game state.
///
/// A phrase whose handler declines (it only applies elsewhere) is retried as
/// a plain verb command built from the same text.
pub(crate) fn dispatch(state: &mut GameState, command: &Command) -> FictionResult<Flow> {
    match command {
        Command::Phrase { phrase, text } => match dispatch_phrase(state, *phrase)? {
            Some(flow) => Ok(flow),
            None => {
                tracing::debug!(%text, "phrase declined, trying verb");
                match command.verb_fallback() {
                    Command::Verb { verb, argument } => dispatch_verb(state, verb, &argument),
                    fallback => not_understood(state, &fallback.text()),
                }
            }
        },
        Command::Verb { verb, argument } => dispatch_verb(state, *verb, argument),
        Command::FreeText { input } => economy::donation_input(state, input),
        Command::Unknown { text } => not_understood(state, text),
    }
}

fn dispatch_phrase(state: &mut GameState, phrase: Phrase) -> FictionResult<Option<Flow>> {
    let flow = match phrase {
        Phrase::MineAway => mining::mine_away(state)?,
        Phrase::DonateMinshin => economy::donate_prompt(state)?,
        Phrase::DepositResources => mining::deposit_prompt(state)?,
        Phrase::DepositNonAmbrosium => mining::refinery_prompt(state)?,
        Phrase::CheckWeeklyQuota => terminals::weekly_quota(state)?,
        Phrase::CheckNews => terminals::news(state)?,
        Phrase::PersonalInformation => terminals::personal_information(state)?,
        Phrase::AskAboutCecil => quests::ask_about_cecil(state)?,
        Phrase::AskCecilAlright => quests::ask_cecil_alright(state)?,
        Phrase::AskCecilSureAlright => quests::ask_cecil_sure_alright(state)?,
        Phrase::OfferLuckyCoin => quests::offer_lucky_coin(state)?,
        Phrase::AskEphsusSoil => quests::ask_ephsus_soil(state)?,
        Phrase::AskEphsusContemplating => quests::ask_ephsus_contemplating(state)?,
        Phrase::OfferGroundSoil => quests::offer_ground_soil(state)?,
        Phrase::AskCreedalIndustrial => quests::ask_creedal_industrial(state)?,
        Phrase::AskWeatherbeeResidential => quests::ask_weatherbee_residential(state)?,
        Phrase::TalkForemanLong => {
            if quests::long_is_waiting(state) {
                quests::complete_long(state)?
            } else {
                talk::talk(state, "colony foreman long")?
            }
        }
        Phrase::GoBack => travel::go_back(state)?,
        Phrase::ToggleDebug => debug::toggle(state)?,
        Phrase::VisitHinter => economy::visit_hinter(state)?,
        Phrase::RequestProphecy => economy::prophecy(state)?,
        Phrase::ApproachArmedasStall => economy::approach_stall(state)?,
        Phrase::AskCreedalDrooling => quests::ask_creedal_drooling(state)?,
        Phrase::StayStrongCreed => quests::stay_strong_creed(state)?,
        Phrase::OfferSteamedBuns => quests::offer_steamed_buns(state)?,
        Phrase::CongratulateWeatherbee => quests::congratulate_weatherbee(state)?,
        Phrase::AskWeatherbeeSpirits => quests::ask_weatherbee_spirits(state)?,
        Phrase::HighFiveWeatherbee => quests::high_five_weatherbee(state)?,
        Phrase::BuyBackpack => economy::buy(state, StallItem::Backpack)?,
        Phrase::BuyBuns => economy::buy(state, StallItem::Buns)?,
        Phrase::BuyGunUpgrade => economy::buy(state, StallItem::GunUpgrade)?,
        Phrase::BuyTowerIdCard => economy::buy_tower_card(state)?,
        Phrase::ApproachTowerTerminal => return terminals::approach_tower_terminal(state),
        Phrase::InsertIdCard => return terminals::insert_id_card_at_tower(state),
        Phrase::InsertTowerIdCard => return terminals::insert_tower_card(state),
        Phrase::ApproachBlackMarket => return economy::approach_black_market(state),
        Phrase::MiningHandbook => return terminals::handbook(state, Handbook::Mining),
        Phrase::RefineryHandbook => return terminals::handbook(state, Handbook::Refinery),
        Phrase::DepositHandbook => return terminals::handbook(state, Handbook::Deposit),
    };
    Ok(Some(flow))
}

fn dispatch_verb(state: &mut GameState, verb: Verb, argument: &str) -> FictionResult<Flow> {
    match verb {
        Verb::Go => travel::go(state, argument),
        Verb::Take => items::take(state, argument),
        Verb::Drop => items::drop(state, argument),
        Verb::Look => info::look(state, argument),
        Verb::Talk => talk::talk(state, argument),
        Verb::Insert => terminals::insert(state, argument),
        Verb::Investigate => info::investigate(state, argument),
        Verb::Check => terminals::check(state, argument),
        Verb::Read => info::read(state, argument),
        Verb::Donate => info::donate_hint(state),
        Verb::Inventory => items::inventory(state),
        Verb::Open => items::open(state, argument),
        Verb::Map => info::map(state),
        Verb::Help => info::help(state),
        Verb::Quit => Ok(Flow::Quit),
        Verb::Debug => debug::command(state, argument),
    }
}

fn not_understood(state: &mut GameState, text: &str) -> FictionResult<Flow> {
    let here = state.here_mut()?;
    tracing::warn!(%text, state = here.current_state(), "unhandled input");
    let suggestion = suggest_action(text, here.available_actions());
    here.push_message(format!("I don't understand '{text}'."));
    if let Some(suggestion) = suggestion {
        here.push_message(format!("Did you mean '{suggestion}'?"));
    }
    Ok(Flow::Continue)
}
