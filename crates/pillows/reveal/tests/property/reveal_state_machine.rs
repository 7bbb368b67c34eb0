//! Property tests: the reveal state machine under arbitrary call sequences.
//!
//! At most one request is ever accepted, at most one fulfillment is ever
//! accepted, and rejected calls never change the state.

use pillows_reveal::{RandomWord, RequestId, RevealError, RevealPhase, RevealState};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Call {
    Request(u64),
    Fulfill(u64, u64),
}

fn arb_call() -> impl Strategy<Value = Call> {
    prop_oneof![
        (1u64..4).prop_map(Call::Request),
        ((1u64..4), (0u64..3)).prop_map(|(id, word)| Call::Fulfill(id, word)),
    ]
}

fn id(raw: u64) -> RequestId {
    RequestId::new(raw).unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn at_most_one_request_and_one_fulfillment(calls in prop::collection::vec(arb_call(), 1..40)) {
        let mut state = RevealState::default();
        let mut requests = 0;
        let mut fulfillments = 0;

        for call in calls {
            let before = state;
            let outcome = match call {
                Call::Request(raw) => state.begin(id(raw)).map(|_| requests += 1),
                Call::Fulfill(raw, word) => state
                    .fulfill(id(raw), RandomWord::from_u64(word))
                    .map(|_| fulfillments += 1),
            };
            if outcome.is_err() {
                prop_assert_eq!(state, before);
            }
        }

        prop_assert!(requests <= 1);
        prop_assert!(fulfillments <= 1);
        prop_assert_eq!(state.is_revealed(), fulfillments == 1);
        if fulfillments == 1 {
            prop_assert_eq!(requests, 1);
        }
    }

    #[test]
    fn fulfillment_needs_the_outstanding_id(pending in 1u64..100, received in 1u64..100) {
        let mut state = RevealState::default();
        state.begin(id(pending)).unwrap();

        let result = state.fulfill(id(received), RandomWord::from_u64(1));
        if pending == received {
            prop_assert!(result.is_ok());
            prop_assert_eq!(state.phase(), RevealPhase::Fulfilled);
        } else {
            prop_assert_eq!(
                result,
                Err(RevealError::UnknownRequest {
                    expected: Some(id(pending)),
                    received: id(received),
                })
            );
            prop_assert_eq!(state.phase(), RevealPhase::Requested);
        }
    }

    #[test]
    fn seed_equals_delivered_word(word in 1u64..) {
        let mut state = RevealState::default();
        state.begin(id(1)).unwrap();
        let seed = state.fulfill(id(1), RandomWord::from_u64(word)).unwrap();
        prop_assert_eq!(seed.word(), RandomWord::from_u64(word));
        prop_assert_eq!(state.seed(), Some(seed));
    }
}
