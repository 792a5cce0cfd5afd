//! Property-based tests for the responder
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::chat::{ChatSession, Origin, TurnOutcome};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = ConversationState> {
    prop_oneof![
        Just(ConversationState::Menu),
        Just(ConversationState::AwaitingDetails),
    ]
}

fn arb_quick_reply() -> impl Strategy<Value = QuickReply> {
    prop::sample::select(QuickReply::ALL.to_vec())
}

/// Digits and spaces never spell a keyword
fn arb_filler() -> impl Strategy<Value = String> {
    "[0-9 ]{0,12}"
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,8}"
}

/// Primary keyword groups with the intent each one selects
fn arb_primary_keyword() -> impl Strategy<Value = (Intent, &'static str)> {
    prop::sample::select(vec![
        (Intent::Products, "product"),
        (Intent::Products, "view"),
        (Intent::Quote, "price"),
        (Intent::Quote, "quote"),
        (Intent::Quote, "cost"),
        (Intent::Distributor, "distributor"),
        (Intent::Distributor, "partner"),
        (Intent::Distributor, "deal"),
        (Intent::BulkOrder, "bulk"),
        (Intent::BulkOrder, "order"),
        (Intent::BulkOrder, "wholesale"),
        (Intent::Contact, "contact"),
        (Intent::Contact, "support"),
        (Intent::Contact, "call"),
    ])
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_quick_reply().prop_map(Event::from),
        "[a-zA-Z ,.@0-9]{0,40}".prop_map(|text| Event::VisitorText { text }),
        arb_blank().prop_map(|text| Event::VisitorText { text }),
    ]
}

/// Keyword each button is equivalent to typing
fn primary_keyword(option: QuickReply) -> &'static str {
    match option {
        QuickReply::Products => "product",
        QuickReply::Quote => "quote",
        QuickReply::Distributor => "distributor",
        QuickReply::BulkOrder => "bulk",
        QuickReply::Contact => "contact",
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_primary_keyword_selects_its_intent(
        (intent, keyword) in arb_primary_keyword(),
        prefix in arb_filler(),
        suffix in arb_filler(),
        shout in any::<bool>(),
    ) {
        let keyword = if shout { keyword.to_uppercase() } else { keyword.to_string() };
        let text = format!("{prefix}{keyword}{suffix}");
        let result = transition(ConversationState::Menu, &Event::text(text)).unwrap();

        prop_assert_eq!(result.intent, Some(intent));
        prop_assert_eq!(result.reply, intent.reply());
        prop_assert_eq!(
            result.new_state == ConversationState::AwaitingDetails,
            intent.captures_lead()
        );
    }

    #[test]
    fn prop_blank_input_always_rejected(state in arb_state(), text in arb_blank()) {
        prop_assert_eq!(
            transition(state, &Event::text(text)),
            Err(TransitionError::EmptyInput)
        );
    }

    #[test]
    fn prop_details_always_acknowledged(text in "[a-zA-Z0-9@., ]{0,40}[a-zA-Z0-9@.,]") {
        let result = transition(ConversationState::AwaitingDetails, &Event::text(text)).unwrap();
        prop_assert_eq!(result.new_state, ConversationState::Menu);
        prop_assert_eq!(result.reply, DETAILS_ACKNOWLEDGED);
        prop_assert_eq!(result.intent, None);
    }

    #[test]
    fn prop_quick_reply_equals_typed_keyword(option in arb_quick_reply()) {
        let button = transition(ConversationState::Menu, &option.into()).unwrap();
        let typed = transition(
            ConversationState::Menu,
            &Event::text(primary_keyword(option)),
        ).unwrap();
        prop_assert_eq!(button, typed);
    }

    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), event in arb_event()) {
        prop_assert_eq!(transition(state, &event), transition(state, &event));
    }

    #[test]
    fn prop_log_grows_in_visitor_assistant_pairs(
        events in proptest::collection::vec(arb_event(), 0..30)
    ) {
        let mut session = ChatSession::new("prop");

        for event in &events {
            let before = session.messages().len();
            match session.submit(event) {
                Ok(TurnOutcome::Replied(turn)) => {
                    prop_assert_eq!(session.messages().len(), before + 2);
                    prop_assert_eq!(turn.visitor.origin, Origin::Visitor);
                    prop_assert_eq!(turn.assistant.origin, Origin::Assistant);
                    prop_assert_eq!(turn.state, session.state());
                }
                Ok(TurnOutcome::Ignored(state)) => {
                    prop_assert_eq!(session.messages().len(), before);
                    prop_assert_eq!(state, session.state());
                }
                Err(_) => prop_assert_eq!(session.messages().len(), before),
            }
        }

        // Greeting first, then strict visitor/assistant alternation
        for (i, message) in session.messages().iter().enumerate() {
            let expected = if i % 2 == 0 { Origin::Assistant } else { Origin::Visitor };
            prop_assert_eq!(message.origin, expected);
            prop_assert_eq!(message.sequence_id, i as u64);
        }
    }
}
