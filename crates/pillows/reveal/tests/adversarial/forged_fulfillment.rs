//! Adversarial test: callbacks from anyone but the requesting oracle are refused.

use std::sync::Arc;

use pillows_reveal::{
    CallerId, MockOracle, OwnerOnly, RandomWord, RandomnessConsumer, RevealError, RevealPhase,
    TraitCollection,
};

fn owner() -> CallerId {
    CallerId::new("owner")
}

#[tokio::test]
async fn impostor_oracle_cannot_fulfil() {
    let oracle = Arc::new(MockOracle::with_id("vrf-wrapper", 0));
    let impostor = MockOracle::with_id("evil-wrapper", 0);
    let mut collection = TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new(owner())));

    let id = collection.request_reveal(&owner()).await.unwrap();
    let err = impostor
        .provide(&mut collection, id, RandomWord::from_u64(1))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RevealError::Unauthorized {
            caller: CallerId::new("evil-wrapper"),
            action: "fulfill randomness",
        }
    );
    assert_eq!(collection.phase(), RevealPhase::Requested);

    oracle
        .provide(&mut collection, id, RandomWord::from_u64(2))
        .await
        .unwrap();
    assert!(collection.is_revealed());
}

#[tokio::test]
async fn owner_cannot_self_fulfil() {
    let oracle = Arc::new(MockOracle::free());
    let mut collection = TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new(owner())));
    let id = collection.request_reveal(&owner()).await.unwrap();

    let err = collection
        .fulfill_randomness(&owner(), id, RandomWord::from_u64(1))
        .unwrap_err();
    assert!(matches!(err, RevealError::Unauthorized { .. }));
    assert!(!collection.is_revealed());
}

#[tokio::test]
async fn unsolicited_fulfillment_is_unknown() {
    let oracle = Arc::new(MockOracle::free());
    let mut collection = TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new(owner())));

    let bogus = pillows_reveal::RequestId::new(1).unwrap();
    let err = oracle
        .provide(&mut collection, bogus, RandomWord::from_u64(1))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RevealError::UnknownRequest {
            expected: None,
            received: bogus
        }
    );
    assert_eq!(collection.phase(), RevealPhase::Unrequested);
}

#[tokio::test]
async fn rejected_caller_cannot_request() {
    let oracle = Arc::new(MockOracle::free());
    let mut collection = TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new(owner())));

    let err = collection
        .request_reveal(&CallerId::new("vrf-wrapper"))
        .await
        .unwrap_err();
    assert!(matches!(err, RevealError::Unauthorized { .. }));
    assert!(oracle.pending().await.is_empty());
}
