use lexer_core::{LineClassifier, LineState};
use lexer_cpp::{CppClassifier, CppState};
use proptest::prelude::*;

fn cpp_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("{".to_string()),
            Just("}".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("//".to_string()),
            Just("\"".to_string()),
            Just("'".to_string()),
            Just("\\".to_string()),
            Just("#if".to_string()),
            Just("#endif".to_string()),
            Just(" ".to_string()),
            "[a-z_]{1,6}",
            "[0-9a-fA-FxXuUlL.eE+-]{1,6}",
            "[-+*/%<>=!&|^~?:.,;()\\[\\]]{1,3}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_are_ordered_and_coalesced(cookie in any::<u16>(), line in cpp_line()) {
        let cpp = CppClassifier::new();
        let out = cpp.classify(CppState::from_cookie(cookie), &line);
        let len = line.chars().count();
        for pair in out.spans.windows(2) {
            prop_assert!(pair[0].column < pair[1].column);
            prop_assert_ne!(pair[0].category, pair[1].category);
        }
        for span in &out.spans {
            prop_assert!(span.column < len);
        }
    }

    #[test]
    fn classification_is_deterministic(cookie in any::<u16>(), line in cpp_line()) {
        let cpp = CppClassifier::new();
        let state = CppState::from_cookie(cookie);
        prop_assert_eq!(cpp.classify(state, &line), cpp.classify(state, &line));
    }

    #[test]
    fn fold_level_moves_by_at_most_the_number_of_delimiters(level in any::<u8>(), line in cpp_line()) {
        let cpp = CppClassifier::new();
        let state = CppState::default().with_fold(lexer_core::FoldLevel::new(level));
        let out = cpp.classify(state, &line);
        let delimiters = line.chars().count() as i32;
        let delta = i32::from(out.state.fold.get()) - i32::from(level);
        prop_assert!(delta.abs() <= delimiters);
    }

    #[test]
    fn cookie_round_trips_for_reachable_states(lines in prop::collection::vec(cpp_line(), 1..8)) {
        let cpp = CppClassifier::new();
        let mut state = CppState::default();
        for line in &lines {
            state = cpp.classify(state, line).state;
            prop_assert_eq!(CppState::from_cookie(state.to_cookie()), state);
        }
    }
}
