//! Mining, Ambrosium deposits and the refinery.

use colony_core::item::names;
use colony_core::{Purchase, StoryFlag};
use rand::Rng;

use super::reply;
use crate::colony::states;
use crate::cue::{AnimationKind, AnimationStep, Cue};
use crate::ending::{Ending, Flow};
use crate::error::FictionResult;
use crate::state::GameState;

/// Mining loot table as `(item, weight)`.
const LOOT_TABLE: &[(&str, u32)] = &[
    (names::GROUND_SOIL, 60),
    (names::AMBROSIUM_CRYSTAL, 20),
    (names::CLAGNUM_PUTTY, 10),
    (names::MATTERSTONE_ORE, 5),
    (names::AMBROSIUM_CLUSTER, 5),
];

fn draw_loot(state: &mut GameState) -> &'static str {
    let total: u32 = LOOT_TABLE.iter().map(|(_, weight)| weight).sum();
    let mut roll = state.rng.random_range(0..total);
    for (name, weight) in LOOT_TABLE {
        if roll < *weight {
            return *name;
        }
        roll -= weight;
    }
    names::GROUND_SOIL
}

/// Run the mining gun once (three draws with the upgrade).
pub(crate) fn mine_away(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.mine) {
        return reply(state, "There is nothing to mine here.");
    }
    if state.clock.hour() >= state.config.facility_close_hour {
        let message = format!(
            "The mines are closed. It's too late in the day. Mines are open from 00:00 to {}:00.",
            state.config.facility_close_hour
        );
        return reply(state, message);
    }
    if !state.actor.has_item_named(names::MINING_GUN) {
        return reply(state, "You need a mining gun to mine.");
    }
    if state.actor.is_inventory_full() {
        return reply(
            state,
            "Your inventory is full. You can't carry any more resources.",
        );
    }

    let seconds = state.rng.random_range(0.5..2.0);
    state.cue(Cue::Mining { seconds });
    state.advance(state.config.mining_hours)?;

    let draws = if state.actor.has_purchased(Purchase::MiningGunUpgrade) {
        state.config.upgraded_mining_yield
    } else {
        1
    };

    let mut results = Vec::new();
    for _ in 0..draws {
        state.mining_attempts += 1;
        if skeleton_surfaces(state) {
            state.actor.set_flag(StoryFlag::FoundSkeleton);
            tracing::info!(attempts = state.mining_attempts, "skeleton found");
            state.cue(Cue::Discovery {
                heading: "you have mined:".to_string(),
                subject: "Skeleton".to_string(),
            });
            return Ok(Flow::Finished(Ending::Skeleton));
        }

        if state.actor.is_inventory_full() {
            results.push(
                "Your inventory is now full. You can't carry any more resources.".to_string(),
            );
            break;
        }

        let loot = draw_loot(state);
        let item = state.item(loot)?;
        if state.actor.add_item(item.clone()) {
            results.push(format!("You have mined: {}.", item.name()));
        } else {
            results.push(format!(
                "Could not add {}, inventory is now full.",
                item.name()
            ));
        }
    }

    tracing::debug!(draws, attempts = state.mining_attempts, "mining run finished");
    let here = state.here_mut()?;
    for line in results {
        here.push_message(line);
    }
    Ok(Flow::Continue)
}

fn skeleton_surfaces(state: &mut GameState) -> bool {
    state.mining_attempts >= state.config.skeleton_discovery_threshold
        && !state.actor.has_flag(StoryFlag::FoundSkeleton)
        && state.rng.random::<f64>() < state.config.skeleton_discovery_chance
}

fn deposit_animation(state: &mut GameState, lines: &[(&str, f64, f64)]) {
    let steps: Vec<AnimationStep> = lines
        .iter()
        .map(|(text, low, high)| AnimationStep::new(*text, state.rng.random_range(*low..*high)))
        .collect();
    state.cue(Cue::Animation {
        kind: AnimationKind::Deposit,
        steps,
    });
}

// ---------------------------------------------------------------------------
// Deposit Station
// ---------------------------------------------------------------------------

/// Walk up to the deposit terminal.
pub(crate) fn deposit_prompt(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.deposit_station) {
        return reply(
            state,
            "You can only deposit Ambrosium at the Deposit Station.",
        );
    }
    let here = state.here_mut()?;
    here.push_message("You approach the deposit terminal. You'll need to use your ID card.");
    here.set_state(states::DEPOSIT_PROMPT);
    Ok(Flow::Continue)
}

/// Hand in every Ambrosium crystal and cluster carried.
///
/// Before the quota is met the weighted amount counts toward it. Once the
/// quota was already met before this deposit, the same weight pays out
/// Minshin instead and the quota counter does not move.
pub(crate) fn deposit_ambrosium(state: &mut GameState) -> FictionResult<()> {
    let crystals = state.actor.count_of(names::AMBROSIUM_CRYSTAL) as u32;
    let clusters = state.actor.count_of(names::AMBROSIUM_CLUSTER) as u32;
    if crystals == 0 && clusters == 0 {
        state.say("You have no Ambrosium to deposit.")?;
        return Ok(());
    }

    state.advance(state.config.deposit_hours)?;
    deposit_animation(
        state,
        &[
            ("Starting spectroscopy...", 1.0, 1.5),
            (
                "Spectroscopy complete. Starting valuation assessment...",
                1.5,
                2.0,
            ),
            (
                "Valuation complete. Appending submission to quota...",
                1.0,
                1.5,
            ),
        ],
    );

    let post_quota = state.actor.quota_met();
    let rate = state.config.minshin_per_ambrosium_post_quota;
    let mut progress: u32 = 0;
    let mut earnings: u32 = 0;
    let mut lines = Vec::new();

    for (name, count, weight) in [
        (names::AMBROSIUM_CRYSTAL, crystals, 1),
        (
            names::AMBROSIUM_CLUSTER,
            clusters,
            state.config.ambrosium_cluster_value,
        ),
    ] {
        if count == 0 {
            continue;
        }
        let units = count.saturating_mul(weight);
        if post_quota {
            let bonus = units.saturating_mul(rate);
            earnings = earnings.saturating_add(bonus);
            lines.push(format!(
                "Successfully deposited {name} x{count} for a bonus of {bonus} Minshin."
            ));
        } else {
            progress = progress.saturating_add(units);
            lines.push(format!(
                "Successfully deposited {name} x{count}. Quota progress: +{units}."
            ));
        }
    }

    state
        .actor
        .remove_all_named(&[names::AMBROSIUM_CRYSTAL, names::AMBROSIUM_CLUSTER]);
    state.actor.add_quota_progress(progress);
    state.actor.earn(earnings);
    tracing::info!(
        crystals,
        clusters,
        progress,
        earnings,
        fulfilled = state.actor.quota_fulfilled(),
        "ambrosium deposited"
    );

    if progress > 0 {
        lines.push(format!("Total quota progress this deposit: {progress}."));
    }
    if earnings > 0 {
        lines.push(format!(
            "Total bonus earnings: {earnings} Minshin. Your balance is now {}.",
            state.actor.minshin()
        ));
    }

    let celebrate = !post_quota
        && state.actor.quota_met()
        && !state.actor.has_flag(StoryFlag::QuotaCelebrated);
    if celebrate {
        state.actor.set_flag(StoryFlag::QuotaCelebrated);
        state.cue(Cue::QuotaCelebration);
        lines.push(
            "A confirmation chime echoes from the deposit station. You have met your quota for \
             this cycle."
                .to_string(),
        );
    }

    let here = state.here_mut()?;
    for line in lines {
        here.push_message(line);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Refinery
// ---------------------------------------------------------------------------

/// Walk up to the refinery hatch.
pub(crate) fn refinery_prompt(state: &mut GameState) -> FictionResult<Flow> {
    if !state.is_at(state.places.refinery) {
        return reply(
            state,
            "You can only deposit other materials at the Refinery.",
        );
    }
    let here = state.here_mut()?;
    here.push_message("You approach the refinery deposit hatch. You'll need to use your ID card.");
    here.set_state(states::REFINERY_PROMPT);
    Ok(Flow::Continue)
}

/// Sell every soil sample, putty and ore carried. Removes exactly the
/// counted items of each type and leaves everything else in place.
pub(crate) fn deposit_materials(state: &mut GameState) -> FictionResult<()> {
    let rates = [
        (names::GROUND_SOIL, state.config.soil_sell_price),
        (names::CLAGNUM_PUTTY, state.config.clagnum_sell_price),
        (names::MATTERSTONE_ORE, state.config.matterstone_sell_price),
    ];
    let held: Vec<(&str, usize, u32)> = rates
        .iter()
        .map(|(name, rate)| (*name, state.actor.count_of(name), *rate))
        .filter(|(_, count, _)| *count > 0)
        .collect();

    if held.is_empty() {
        state.say("You have no non-Ambrosium materials to deposit.")?;
        return Ok(());
    }

    state.advance(state.config.deposit_hours)?;
    deposit_animation(
        state,
        &[
            ("Sorting materials...", 1.0, 1.5),
            ("Assessing materials...", 1.0, 1.5),
            ("Checking condition...", 1.5, 2.0),
            (
                "Assessment complete. Appending respective Minshin to balance...",
                1.0,
                1.5,
            ),
        ],
    );

    let mut total: u32 = 0;
    let mut lines = Vec::new();
    for (name, count, rate) in held {
        let removed = state.actor.remove_count(name, count);
        let earnings = u32::try_from(removed)
            .unwrap_or(u32::MAX)
            .saturating_mul(rate);
        total = total.saturating_add(earnings);
        lines.push(format!(
            "Successfully deposited {name} x{removed} = {earnings} Minshin"
        ));
    }
    state.actor.earn(total);
    tracing::info!(total, balance = state.actor.minshin(), "materials refined");
    lines.push(format!(
        "Total earnings: {total} Minshin. Your balance is now {}.",
        state.actor.minshin()
    ));

    let here = state.here_mut()?;
    for line in lines {
        here.push_message(line);
    }
    Ok(())
}
