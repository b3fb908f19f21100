//! Raw input to `(verb, argument)`.

use colony_core::{GO_BACK, InputMode, Location};

/// Outcome of resolving one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A verb with its (possibly empty) argument.
    Action {
        /// First token, uppercased.
        verb: String,
        /// Remaining text with its case preserved.
        argument: String,
    },
    /// Blank input; nothing happens.
    Empty,
    /// A menu number out of range. A message has been queued.
    Rejected,
}

impl Resolution {
    /// Split text into an uppercase verb and the rest.
    pub fn split(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::Empty;
        }
        let (verb, argument) = match text.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (text, ""),
        };
        Self::Action {
            verb: verb.to_uppercase(),
            argument: argument.to_string(),
        }
    }
}

/// Resolve a line typed at `location`.
///
/// Digits select a 1-based entry of the current menu, except in free-text
/// states where they are passed through unchanged.
pub fn resolve_input(raw: &str, location: &mut Location) -> Resolution {
    let raw = raw.trim();
    if raw.is_empty() {
        return Resolution::Empty;
    }

    if location.input_mode() == InputMode::FreeText {
        if raw.eq_ignore_ascii_case(GO_BACK) {
            return Resolution::split(GO_BACK);
        }
        return Resolution::split(raw);
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        let label = raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| location.available_actions().get(idx))
            .map(|label| label.to_lowercase());
        return match label {
            Some(label) => {
                tracing::debug!(choice = raw, %label, "menu choice resolved");
                Resolution::split(&label)
            }
            None => {
                tracing::warn!(choice = raw, location = location.name(), "invalid action number");
                location.push_message(format!("Invalid action number: {raw}"));
                Resolution::Rejected
            }
        };
    }

    Resolution::split(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colony_core::MAIN_STATE;

    fn location() -> Location {
        let mut loc = Location::new("Memorial Pond", "");
        loc.set_menu(
            MAIN_STATE,
            vec![
                "read memorial pond plaque".to_string(),
                "donate minshin into donation terminal".to_string(),
                "go central plaza".to_string(),
            ],
        );
        loc.add_free_text_state("donating").unwrap();
        loc
    }

    fn action(verb: &str, argument: &str) -> Resolution {
        Resolution::Action {
            verb: verb.to_string(),
            argument: argument.to_string(),
        }
    }

    #[test]
    fn number_selects_menu_entry() {
        let mut loc = location();
        assert_eq!(resolve_input("3", &mut loc), action("GO", "central plaza"));
        assert_eq!(
            resolve_input(" 1 ", &mut loc),
            action("READ", "memorial pond plaque")
        );
    }

    #[test]
    fn menu_label_is_lowercased() {
        let mut loc = Location::new("Your Quarters", "");
        loc.set_menu(MAIN_STATE, vec!["take ID card".to_string()]);
        assert_eq!(resolve_input("1", &mut loc), action("TAKE", "id card"));
    }

    #[test]
    fn out_of_range_number_is_rejected_with_message() {
        let mut loc = location();
        assert_eq!(resolve_input("4", &mut loc), Resolution::Rejected);
        assert_eq!(resolve_input("0", &mut loc), Resolution::Rejected);
        assert_eq!(
            loc.drain_messages(),
            vec!["Invalid action number: 4", "Invalid action number: 0"]
        );
    }

    #[test]
    fn free_text_keeps_argument_case() {
        let mut loc = location();
        assert_eq!(
            resolve_input("talk to Greyman Cecil", &mut loc),
            action("TALK", "to Greyman Cecil")
        );
        assert_eq!(resolve_input("map", &mut loc), action("MAP", ""));
    }

    #[test]
    fn empty_input() {
        let mut loc = location();
        assert_eq!(resolve_input("   ", &mut loc), Resolution::Empty);
    }

    #[test]
    fn free_text_state_passes_numbers_through() {
        let mut loc = location();
        loc.set_state("donating");
        assert_eq!(resolve_input("25", &mut loc), action("25", ""));
        assert_eq!(resolve_input("Go Back", &mut loc), action("GO", "back"));
        assert!(loc.messages().is_empty());
    }
}
