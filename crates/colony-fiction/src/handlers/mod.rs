//! Command handlers, grouped by concern.
//!
//! Each handler takes the shared [`GameState`] and returns the turn's
//! [`Flow`]. Expected rejections are location messages with
//! `Flow::Continue`; errors are reserved for broken world invariants.
//! Phrase handlers that only apply at one place return `Ok(None)` elsewhere
//! so the dispatcher can fall back to the plain verb.

pub(crate) mod debug;
pub(crate) mod economy;
pub(crate) mod info;
pub(crate) mod items;
pub(crate) mod mining;
pub(crate) mod quests;
pub(crate) mod talk;
pub(crate) mod terminals;
pub(crate) mod travel;

use crate::ending::Flow;
use crate::error::FictionResult;
use crate::state::GameState;

/// Stock reply for an action that does not fit the current menu.
pub(crate) const NONSENSE: &str = "That doesn't make sense right now.";

/// Queue `message` and keep playing.
pub(crate) fn reply(state: &mut GameState, message: impl Into<String>) -> FictionResult<Flow> {
    state.say(message)?;
    Ok(Flow::Continue)
}

/// `"deposit station"` -> `"Deposit Station"`.
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("deposit station"), "Deposit Station");
        assert_eq!(title_case("refinery"), "Refinery");
        assert_eq!(title_case(""), "");
    }
}
