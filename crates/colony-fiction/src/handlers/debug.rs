//! Debug tooling: `debugmode` and `debug set|give|goto`.

use std::str::FromStr;

use super::reply;
use crate::ending::Flow;
use crate::error::FictionResult;
use crate::state::GameState;

pub(crate) fn toggle(state: &mut GameState) -> FictionResult<Flow> {
    state.debug_mode = !state.debug_mode;
    tracing::info!(enabled = state.debug_mode, "debug mode toggled");
    let status = if state.debug_mode { "ON" } else { "OFF" };
    reply(state, format!("Debug mode is now {status}."))
}

/// Run a `debug` subcommand. Only available while debug mode is on.
pub(crate) fn command(state: &mut GameState, argument: &str) -> FictionResult<Flow> {
    if !state.debug_mode {
        return reply(state, "Debug mode is not active.");
    }
    let argument = argument.trim().to_lowercase();
    let mut parts = argument.split_whitespace();
    let Some(sub) = parts.next() else {
        return reply(
            state,
            "Usage: debug <command> <args...>. Available: set, give, goto",
        );
    };
    let args: Vec<&str> = parts.collect();
    tracing::info!(sub, ?args, "debug command");

    match sub {
        "set" => set(state, &args),
        "give" => give(state, &args.join(" ")),
        "goto" => goto(state, &args.join(" ")),
        other => reply(state, format!("Unknown debug command '{other}'.")),
    }
}

fn parse<T: FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Debug command failed: invalid value '{value}'."))
}

fn set(state: &mut GameState, args: &[&str]) -> FictionResult<Flow> {
    let [system, value, ..] = args else {
        return reply(
            state,
            "Usage: debug set <system> <value>. Systems: time, day, minshin, quota",
        );
    };

    let outcome = match *system {
        "time" | "clock" => parse::<f64>(value).and_then(|hour| {
            state
                .clock
                .set_hour(hour)
                .map_err(|e| format!("Debug command failed: {e}"))?;
            Ok(format!("Debug: Time set to {}.", state.clock.hour()))
        }),
        "day" => parse::<u32>(value).map(|day| {
            state.clock.set_day(day);
            format!("Debug: Day set to {}.", state.clock.day())
        }),
        "minshin" | "currency" => parse::<u32>(value).map(|amount| {
            state.actor.set_minshin(amount);
            format!("Debug: Minshin set to {}.", state.actor.minshin())
        }),
        "quota" => parse::<u32>(value).map(|amount| {
            state.actor.set_quota_fulfilled(amount);
            format!(
                "Debug: Quota fulfilled set to {}.",
                state.actor.quota_fulfilled()
            )
        }),
        other => Ok(format!("Debug: Unknown system '{other}'.")),
    };

    match outcome {
        Ok(message) => reply(state, message),
        Err(message) => {
            tracing::warn!(system, value, "debug set rejected");
            reply(state, message)
        }
    }
}

fn give(state: &mut GameState, name: &str) -> FictionResult<Flow> {
    if name.is_empty() {
        return reply(state, "Usage: debug give <item_name>");
    }
    let Some(item) = state.catalog.find_ignore_case(name) else {
        return reply(state, format!("Debug: Unknown item '{name}'."));
    };
    let message = if state.actor.add_item(item.clone()) {
        format!("Debug: Gave player {}.", item.name())
    } else {
        "Debug: Player inventory is full.".to_string()
    };
    reply(state, message)
}

fn goto(state: &mut GameState, name: &str) -> FictionResult<Flow> {
    if name.is_empty() {
        return reply(state, "Usage: debug goto <room_name>");
    }
    let Some(target) = state.world.find(name) else {
        let available = state
            .world
            .names()
            .iter()
            .map(|n| n.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        let here = state.here_mut()?;
        here.push_message(format!("Debug: Unknown room '{name}'."));
        here.push_message(format!("Available: {available}"));
        return Ok(Flow::Continue);
    };
    state.move_to(target)?;
    let arrived = state.here()?.name().to_string();
    reply(state, format!("Debug: Teleported to {arrived}."))
}
