//! End-to-end test: a funded oracle reveals a collection exactly once.

use std::sync::Arc;

use pillows_reveal::{
    CallerId, MockOracle, OracleError, OwnerOnly, RandomWord, RequestId, RevealError, RevealPhase,
    TraitCollection, TraitLookup,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const FEE: u64 = 100;

fn owner() -> CallerId {
    CallerId::new("dormint-owner")
}

fn deploy() -> (Arc<MockOracle>, TraitCollection) {
    let oracle = Arc::new(MockOracle::new(FEE));
    let collection = TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new(owner())));
    (oracle, collection)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn funded_reveal_flow() {
    let (oracle, mut collection) = deploy();
    assert_eq!(collection.get_traits(0), TraitLookup::Unavailable);

    // No funds yet.
    let err = collection.request_reveal(&owner()).await.unwrap_err();
    assert!(matches!(
        err,
        RevealError::Oracle(OracleError::InsufficientFunds { .. })
    ));
    assert_eq!(collection.phase(), RevealPhase::Unrequested);

    oracle.fund(FEE).await;
    let request_id = collection.request_reveal(&owner()).await.unwrap();
    assert_eq!(request_id.get(), oracle.last_request_id().await);
    assert_eq!(oracle.balance().await, 0);
    assert_eq!(collection.phase(), RevealPhase::Requested);
    assert_eq!(collection.get_traits(0), TraitLookup::Unavailable);

    oracle
        .provide(&mut collection, request_id, RandomWord::from_u64(1337))
        .await
        .unwrap();

    assert_eq!(collection.phase(), RevealPhase::Fulfilled);
    for index in [0u64, 1, 500, 999] {
        assert!(collection.get_traits(index).is_available());
    }
}

#[tokio::test]
async fn second_request_is_rejected_in_every_later_phase() {
    let (oracle, mut collection) = deploy();
    oracle.fund(FEE * 3).await;

    let request_id = collection.request_reveal(&owner()).await.unwrap();
    assert_eq!(
        collection.request_reveal(&owner()).await,
        Err(RevealError::AlreadyRequested)
    );

    oracle
        .provide(&mut collection, request_id, RandomWord::from_u64(42))
        .await
        .unwrap();
    assert_eq!(
        collection.request_reveal(&owner()).await,
        Err(RevealError::AlreadyRequested)
    );

    // Rejected requests never reached the oracle.
    assert_eq!(oracle.last_request_id().await, 1);
    assert_eq!(oracle.balance().await, FEE * 2);
}

#[tokio::test]
async fn mismatched_request_id_changes_nothing() {
    let (oracle, mut collection) = deploy();
    oracle.fund(FEE).await;
    let request_id = collection.request_reveal(&owner()).await.unwrap();
    let before = *collection.state();

    let stale = RequestId::new(request_id.get() + 1).unwrap();
    let err = oracle
        .provide(&mut collection, stale, RandomWord::from_u64(1337))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RevealError::UnknownRequest {
            expected: Some(request_id),
            received: stale
        }
    );
    assert_eq!(*collection.state(), before);
    assert_eq!(collection.get_traits(0), TraitLookup::Unavailable);
}

#[tokio::test]
async fn second_fulfillment_is_rejected_and_seed_is_kept() {
    let (oracle, mut collection) = deploy();
    oracle.fund(FEE).await;
    let request_id = collection.request_reveal(&owner()).await.unwrap();

    oracle
        .provide(&mut collection, request_id, RandomWord::from_u64(1337))
        .await
        .unwrap();
    let seed = collection.seed();
    let sample = collection.get_traits(7);

    let err = oracle
        .provide(&mut collection, request_id, RandomWord::from_u64(7331))
        .await
        .unwrap_err();
    assert_eq!(err, RevealError::AlreadyFulfilled);
    assert_eq!(collection.seed(), seed);
    assert_eq!(collection.get_traits(7), sample);
}

#[tokio::test]
async fn zero_randomness_keeps_the_request_open() {
    let (oracle, mut collection) = deploy();
    oracle.fund(FEE).await;
    let request_id = collection.request_reveal(&owner()).await.unwrap();

    let err = oracle
        .provide(&mut collection, request_id, RandomWord::ZERO)
        .await
        .unwrap_err();
    assert_eq!(err, RevealError::InvalidRandomness { request_id });
    assert_eq!(collection.phase(), RevealPhase::Requested);

    oracle
        .provide(&mut collection, request_id, RandomWord::from_u64(9))
        .await
        .unwrap();
    assert!(collection.is_revealed());
}

#[tokio::test]
async fn same_randomness_reveals_same_collection() {
    let (oracle_a, mut a) = deploy();
    let (oracle_b, mut b) = deploy();
    for (oracle, collection) in [(&oracle_a, &mut a), (&oracle_b, &mut b)] {
        oracle.fund(FEE).await;
        let id = collection.request_reveal(&owner()).await.unwrap();
        oracle
            .provide(collection, id, RandomWord::from_u64(2024))
            .await
            .unwrap();
    }

    for index in 0..100 {
        assert_eq!(a.get_traits(index), b.get_traits(index));
    }
}
