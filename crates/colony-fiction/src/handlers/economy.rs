//! Minshin going in and out: donations, the market, Hinter, the black market.

use colony_core::item::names;
use colony_core::{MAIN_STATE, Purchase, Quest};
use rand::Rng;

use super::{NONSENSE, reply};
use crate::colony::{labels, npcs, states};
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::narrative;
use crate::state::GameState;

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

/// Open the donation prompt at the pond.
pub(crate) fn donate_prompt(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.pond) {
        return reply(state, NONSENSE);
    }
    let progress = format!(
        "Donations Received: {}/{} Minshin.",
        state.total_donations, state.config.foreman_spawn_threshold
    );
    let prompt = format!(
        "Make a custom donation. (Minimum {}, or 'go back')",
        state.config.minimum_donation
    );
    let here = state.here_mut()?;
    here.push_message(progress);
    here.push_message(prompt);
    here.set_state(states::DONATING);
    Ok(Flow::Continue)
}

/// Handle text typed at the donation prompt.
pub(crate) fn donation_input(state: &mut GameState, input: &str) -> FictionResult<Flow> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("go back") {
        let here = state.here_mut()?;
        here.set_state(MAIN_STATE);
        here.push_message("You step back from the donation bucket.");
        return Ok(Flow::Continue);
    }

    let Ok(amount) = input.parse::<u32>() else {
        return reply(state, "Please enter a valid number or type 'go back'.");
    };
    if amount < state.config.minimum_donation {
        let message = format!(
            "You must donate at least {} Minshin.",
            state.config.minimum_donation
        );
        return reply(state, message);
    }
    if !state.actor.spend(amount) {
        let message = format!(
            "You don't have enough Minshin. You only have {}.",
            state.actor.minshin()
        );
        return reply(state, message);
    }

    state.total_donations = state.total_donations.saturating_add(amount);
    tracing::info!(amount, total = state.total_donations, "donation made");
    let here = state.here_mut()?;
    here.push_message(format!(
        "You donated {amount} Minshin. You feel a bit better about the state of the colony."
    ));
    here.set_state(MAIN_STATE);
    check_for_foreman(state)?;
    Ok(Flow::Continue)
}

/// Bring Long to the pond once donations reach the threshold. Idempotent.
pub(crate) fn check_for_foreman(state: &mut GameState) -> FictionResult<()> {
    if state.total_donations < state.config.foreman_spawn_threshold {
        return Ok(());
    }
    let pond = state.place_mut(state.places.pond)?;
    if pond.has_npc(npcs::LONG) {
        return Ok(());
    }
    pond.add_npc(npcs::LONG);
    pond.push_message(format!("\n{}", narrative::FOREMAN_ARRIVES));
    tracing::info!("foreman long has appeared at the pond");
    Ok(())
}

// ---------------------------------------------------------------------------
// Merchant Armedas
// ---------------------------------------------------------------------------

/// Which stall item a purchase phrase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StallItem {
    Backpack,
    Buns,
    GunUpgrade,
}

impl StallItem {
    fn purchase(self) -> Purchase {
        match self {
            Self::Backpack => Purchase::XlBackpack,
            Self::Buns => Purchase::SteamedBuns,
            Self::GunUpgrade => Purchase::MiningGunUpgrade,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Backpack => "Olympus XL Backpack",
            Self::Buns => "Steamed Buns",
            Self::GunUpgrade => "Heavy Beam Mining Gun Upgrade",
        }
    }

    fn already_bought(self) -> &'static str {
        match self {
            Self::Backpack => "You already bought the backpack.",
            Self::Buns => "You already bought the steamed buns.",
            Self::GunUpgrade => "You already bought the mining gun upgrade.",
        }
    }

    fn price(self, state: &GameState) -> u32 {
        match self {
            Self::Backpack => state.config.backpack_price,
            Self::Buns => state.config.steamed_buns_price,
            Self::GunUpgrade => state.config.mining_upgrade_price,
        }
    }

    const ALL: [StallItem; 3] = [Self::Backpack, Self::Buns, Self::GunUpgrade];
}

/// Walk up to the stall and list what is still for sale.
pub(crate) fn approach_stall(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.market) {
        return reply(state, NONSENSE);
    }
    state.enter_state(states::MARKET_STALL)?;

    let sold_out = StallItem::ALL
        .iter()
        .all(|item| state.actor.has_purchased(item.purchase()));
    if sold_out {
        let here = state.here_mut()?;
        here.push_message("You have run me dry, please come back next cycle for new goods!.");
        here.set_menu(states::MARKET_STALL, vec![colony_core::GO_BACK.to_string()]);
        return Ok(Flow::Continue);
    }

    let mut menu: Vec<String> = StallItem::ALL
        .iter()
        .map(|item| {
            if state.actor.has_purchased(item.purchase()) {
                format!("{} -bought-", item.title())
            } else {
                format!("buy {} ({} Minshin)", item.title(), item.price(state))
            }
        })
        .collect();
    menu.push(colony_core::GO_BACK.to_string());

    let here = state.here_mut()?;
    here.push_message("ah hello there. take a gander at my goods?");
    here.set_menu(states::MARKET_STALL, menu);
    Ok(Flow::Continue)
}

/// Buy one stall item.
pub(crate) fn buy(state: &mut GameState, item: StallItem) -> FictionResult<Flow> {
    if !state.in_state(states::MARKET_STALL) {
        return reply(state, "You need to be at the stall to buy things.");
    }
    if state.actor.has_purchased(item.purchase()) {
        return reply(state, item.already_bought());
    }
    let price = item.price(state);
    if !state.actor.can_afford(price) {
        return reply(state, "You don't have enough Minshin for that.");
    }

    let message = match item {
        StallItem::Backpack => {
            let before = state.actor.inventory_capacity();
            state
                .actor
                .set_inventory_capacity(state.config.upgraded_inventory_capacity);
            format!(
                "Your inventory space has increased from {before} to {}!",
                state.actor.inventory_capacity()
            )
        }
        StallItem::Buns => {
            if state.actor.is_inventory_full() {
                return reply(state, "Your inventory is full.");
            }
            let buns = state.item(names::STEAMED_BUNS)?;
            if !state.actor.add_item(buns) {
                return reply(state, "You can't carry the Steamed Buns.");
            }
            "You bought the Steamed Buns.".to_string()
        }
        StallItem::GunUpgrade => "You bought the Heavy Beam Mining Gun Upgrade.".to_string(),
    };

    state.actor.spend(price);
    state.actor.record_purchase(item.purchase());
    tracing::info!(item = item.title(), price, "stall purchase");
    state.say(message)?;
    approach_stall(state)
}

// ---------------------------------------------------------------------------
// Hinter's Prophecies
// ---------------------------------------------------------------------------

pub(crate) fn visit_hinter(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.market) {
        return reply(state, NONSENSE);
    }
    let here = state.here_mut()?;
    here.set_state(states::HINTER_PROPHECIES);
    here.push_message(narrative::HINTER_GREETING);
    Ok(Flow::Continue)
}

fn prophecy_for(quest: Quest) -> &'static str {
    match quest {
        Quest::Creedal => {
            "'Even guards need to eat sometimes. I heard the steamed buns next door are lovely.'"
        }
        Quest::ForemanLong => "'Donations are always welcome at the memorial pond.'",
        Quest::Cecil => "'One of the miners has lost their coin.'",
        Quest::Weatherbee => {
            "'Sometimes the job vacancies on the bulletin board can help more than just you'"
        }
        Quest::Ephsus => "'Someone really needs some soil'",
    }
}

/// Pay for a hint about one unfinished quest. Refunded when none remain.
pub(crate) fn prophecy(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::HINTER_PROPHECIES) {
        return reply(state, NONSENSE);
    }
    let cost = state.config.prophecy_cost;
    if !state.actor.spend(cost) {
        return reply(
            state,
            format!("You do not have enough Minshin. A reading costs {cost}."),
        );
    }

    let open: Vec<Quest> = [
        Quest::Creedal,
        Quest::ForemanLong,
        Quest::Cecil,
        Quest::Weatherbee,
        Quest::Ephsus,
    ]
    .into_iter()
    .filter(|quest| !state.actor.is_quest_complete(*quest))
    .collect();

    if open.is_empty() {
        state.actor.earn(cost);
        return reply(
            state,
            "'The threads of fate are clear to you now. There is nothing more I can show you.' \
             Your Minshin is returned.",
        );
    }

    let pick = open[state.rng.random_range(0..open.len())];
    tracing::info!(quest = ?pick, "prophecy given");
    let message = format!(
        "Hinter takes your {cost} Minshin and her eyes cloud over. {}",
        prophecy_for(pick)
    );
    reply(state, message)
}

// ---------------------------------------------------------------------------
// Blackest of Markets
// ---------------------------------------------------------------------------

/// Approach the black market stall. Declines away from the market.
pub(crate) fn approach_black_market(state: &mut GameState) -> FictionResult<Option<Flow>> {
    if state.actor.has_purchased(Purchase::BlackMarketCard) {
        return reply(state, "The dark alley where the stall once stood is empty.").map(Some);
    }
    if !state.is_at(state.places.market) {
        return Ok(None);
    }

    if state.clock.day() >= state.config.black_market_open_day {
        let offer = format!(
            "buy Communications Tower ID Card ({} Minshin)",
            state.config.black_market_card_price
        );
        let here = state.here_mut()?;
        here.set_state(states::BLACKEST_MARKET);
        here.push_message("A shadowy figure beckons you closer. 'Looking for something special?'");
        here.set_menu(
            states::BLACKEST_MARKET,
            vec![offer, colony_core::GO_BACK.to_string()],
        );
    } else {
        let here = state.here_mut()?;
        here.set_state(states::BLACKEST_MARKET_SIGN);
        here.push_message(narrative::BLACK_MARKET_SIGN);
    }
    Ok(Some(Flow::Continue))
}

/// Buy the forged tower card. The stall vanishes afterwards.
pub(crate) fn buy_tower_card(state: &mut GameState) -> FictionResult<Flow> {
    if !state.in_state(states::BLACKEST_MARKET) {
        return reply(state, "You can only do this at the Blackest of Markets stall.");
    }
    if state.actor.has_purchased(Purchase::BlackMarketCard) {
        return reply(state, "The shadowy figure is gone.");
    }
    let price = state.config.black_market_card_price;
    if !state.actor.can_afford(price) {
        let message = format!(
            "You don't have enough Minshin. The figure scoffs at your {} Minshin.",
            state.actor.minshin()
        );
        return reply(state, message);
    }
    if state.actor.is_inventory_full() {
        return reply(state, "Your inventory is full.");
    }

    let card = state.item(names::TOWER_ID_CARD)?;
    if !state.actor.add_item(card) {
        return reply(state, "You can't carry the card.");
    }
    state.actor.spend(price);
    state.actor.record_purchase(Purchase::BlackMarketCard);
    tracing::info!(price, "black market card bought");

    let market = state.place_mut(state.places.market)?;
    market.remove_action(MAIN_STATE, labels::BLACK_MARKET_STALL);
    market.push_message(
        "You slide the Minshin across. The figure hands you a surprisingly well-made ID card \
         and melts back into the shadows. The stall is gone.",
    );
    market.set_state(MAIN_STATE);
    Ok(Flow::Continue)
}
