//! Property-based tests for the dialogue transition function.
//!
//! These check invariants that must hold for every utterance, not just the
//! phrases exercised in `transition`'s unit tests.

use super::session::SessionData;
use super::state::DialogueState;
use super::transition::{transition, Branch};
use crate::common::text::patterns;
use crate::core::catalog::Catalog;
use crate::core::config::{parse_config, DocumentFormat};
use proptest::prelude::*;

const DOC: &str = r#"
    [prompts]
    welcome = "Welcome to the Nigeria visa helper."
    ask_country = "Which country are you from?"
    goodbye = "Goodbye!"
    ask_more = "Can I help with anything else?"

    [[country_check.countries]]
    name = "Ghana"
    visa_required = false

    [[country_check.countries]]
    name = "Iran"
    visa_required = true

    [[country_check.countries]]
    name = "United States"
    visa_required = true

    [visa_types.general]
    response = "Passport valid for at least six months."

    [visa_types.tourist]
    response = "Hotel reservation and return ticket."

    [visa_types.business]
    response = "Letter of invitation from a Nigerian company."
"#;

const COUNTRIES: [&str; 3] = ["Ghana", "Iran", "United States"];

fn catalog() -> Catalog {
    let config = parse_config(DOC, DocumentFormat::Toml).expect("fixture parses");
    Catalog::from_config(&config).expect("catalog builds")
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = DialogueState> {
    prop_oneof![
        Just(DialogueState::AskCountry),
        Just(DialogueState::AskVisaType),
        Just(DialogueState::End),
    ]
}

fn arb_country() -> impl Strategy<Value = String> {
    proptest::sample::select(COUNTRIES.to_vec()).prop_map(String::from)
}

fn arb_session_data() -> impl Strategy<Value = SessionData> {
    prop_oneof![
        Just(None),
        arb_country().prop_map(Some),
        "[a-zA-Z ]{1,20}".prop_map(Some),
    ]
    .prop_map(|current_country| SessionData { current_country })
}

/// Random case for every character of `text`.
fn arb_casing(text: String) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), text.chars().count()).prop_map(move |upper| {
        text.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}

fn arb_utterance() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z ,.!?'-]{0,40}",
        "[{}%#()*+?.\\[\\]|^$\\\\]{0,20}",
        arb_country(),
        (
            "[a-z ]{0,10}",
            proptest::sample::select(vec!["thanks", "bye", "hello", "yes", "options", "tourist"]),
            "[a-z ]{0,10}",
        )
            .prop_map(|(pre, cue, post)| format!("{pre} {cue} {post}")),
    ]
}

fn arb_farewell() -> impl Strategy<Value = String> {
    (
        "[a-z ]{0,12}",
        proptest::sample::select(vec!["bye", "goodbye", "see you", "exit", "quit"]),
        "[a-z ]{0,12}",
    )
        .prop_flat_map(|(pre, word, post)| arb_casing(format!("{pre} {word} {post}")))
}

/// A country name as a user might type it: any casing, padding and trailing punctuation.
fn arb_country_spelling(country: String) -> impl Strategy<Value = String> {
    (
        arb_casing(country),
        " {0,3}",
        proptest::sample::select(vec!["", "?", "!", "."]),
    )
        .prop_map(|(name, pad, mark)| format!("{pad}{name}{mark}{pad}"))
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Every utterance in every state gets a reply.
    #[test]
    fn prop_every_input_gets_a_reply(
        state in arb_state(),
        data in arb_session_data(),
        input in arb_utterance(),
    ) {
        let catalog = catalog();
        let t = transition(state, &data, &catalog, &input);
        prop_assert!(!t.reply.trim().is_empty(), "empty reply for {:?} in {}", input, state);
    }

    // Same catalog and inputs, same outcome.
    #[test]
    fn prop_transition_is_deterministic(
        state in arb_state(),
        data in arb_session_data(),
        input in arb_utterance(),
    ) {
        let catalog = catalog();
        prop_assert_eq!(
            transition(state, &data, &catalog, &input),
            transition(state, &data, &catalog, &input)
        );
    }

    // A farewell ends the conversation from any state.
    #[test]
    fn prop_farewell_always_ends(
        state in arb_state(),
        data in arb_session_data(),
        input in arb_farewell(),
    ) {
        prop_assume!(patterns::is_farewell(&input) && !patterns::is_thanks(&input));
        let catalog = catalog();
        let t = transition(state, &data, &catalog, &input);
        prop_assert_eq!(t.state, DialogueState::End);
        prop_assert_eq!(t.reply.as_str(), "Goodbye!");
        prop_assert_eq!(t.branch, Branch::Farewell);
        prop_assert_eq!(t.data, data);
    }

    // Naming the current country again while a visa type is expected changes nothing.
    #[test]
    fn prop_same_country_is_a_fixed_point(
        (country, input) in arb_country()
            .prop_flat_map(|country| (Just(country.clone()), arb_country_spelling(country))),
        repeats in 1usize..4,
    ) {
        let catalog = catalog();
        let data = SessionData { current_country: Some(country) };
        let first = transition(DialogueState::AskVisaType, &data, &catalog, &input);
        prop_assert_eq!(first.state, DialogueState::AskVisaType);
        prop_assert_eq!(&first.data, &data);
        prop_assert_eq!(&first.branch, &Branch::SameCountry);

        let mut state = first.state;
        let mut current = first.data.clone();
        for _ in 0..repeats {
            let next = transition(state, &current, &catalog, &input);
            prop_assert_eq!(&next, &first);
            state = next.state;
            current = next.data;
        }
    }
}
