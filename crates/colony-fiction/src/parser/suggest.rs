//! Close-match suggestions for unrecognized input.

use strsim::jaro_winkler;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Best menu label similar to `input`, if any is close enough.
pub fn suggest_action(input: &str, actions: &[String]) -> Option<String> {
    let input_lower = input.trim().to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    actions
        .iter()
        .map(|label| (label, jaro_winkler(&input_lower, &label.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, _)| label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn menu() -> Vec<String> {
        ["mine away", "view 'how to mine' handbook", "go industrial plaza"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn typo_is_suggested() {
        assert_eq!(
            suggest_action("mine awya", &menu()),
            Some("mine away".to_string())
        );
    }

    #[test]
    fn unrelated_input_has_no_suggestion() {
        assert_eq!(suggest_action("xyzzy", &menu()), None);
        assert_eq!(suggest_action("", &menu()), None);
    }

    proptest! {
        #[test]
        fn suggestion_is_always_a_menu_label(input in "[a-z ']{0,30}") {
            let actions = menu();
            if let Some(label) = suggest_action(&input, &actions) {
                prop_assert!(actions.contains(&label));
            }
        }

        #[test]
        fn exact_label_suggests_itself(idx in 0usize..3) {
            let actions = menu();
            prop_assert_eq!(
                suggest_action(&actions[idx].to_uppercase(), &actions),
                Some(actions[idx].clone())
            );
        }
    }
}
