//! End-to-end test: revealed collections follow the published weights.

use std::sync::Arc;

use pillows_reveal::{CallerId, MockOracle, OwnerOnly, RandomWord, TraitCollection};
use pillows_traits::{AxisHistogram, WEIGHTS_V1};
use pillows_types::{Axis, Rarity, Shape};

async fn revealed_with(word: u64) -> TraitCollection {
    let oracle = Arc::new(MockOracle::free());
    let mut collection =
        TraitCollection::new(oracle.clone(), Arc::new(OwnerOnly::new("owner")));
    let id = collection
        .request_reveal(&CallerId::new("owner"))
        .await
        .unwrap();
    oracle
        .provide(&mut collection, id, RandomWord::from_u64(word))
        .await
        .unwrap();
    collection
}

fn histogram(collection: &TraitCollection, count: u64) -> AxisHistogram {
    collection
        .query_range(0, count - 1)
        .unwrap()
        .filter_map(|item| item.traits.into_traits())
        .collect()
}

#[tokio::test]
async fn rarity_tracks_weights() {
    let collection = revealed_with(1337).await;
    let histogram = histogram(&collection, 5_000);
    assert_eq!(histogram.total(), 5_000);

    for rarity in Rarity::ALL {
        let observed = histogram.frequency(Axis::Rarity, rarity.code());
        let expected = WEIGHTS_V1.rarity.probability(*rarity);
        assert!(
            (observed - expected).abs() < 0.03,
            "{rarity}: observed {observed:.3}, expected {expected:.3}"
        );
    }
}

#[tokio::test]
async fn common_is_most_frequent_and_legendary_least() {
    let collection = revealed_with(99).await;
    let histogram = histogram(&collection, 2_000);
    let counts = histogram.counts(Axis::Rarity);

    assert_eq!(counts.len(), Rarity::ALL.len());
    assert!(counts[Rarity::Common.code() as usize] > counts[Rarity::Uncommon.code() as usize]);
    assert!(counts[Rarity::Legendary.code() as usize] < counts[Rarity::Epic.code() as usize]);
}

#[tokio::test]
async fn shape_tracks_weights() {
    let collection = revealed_with(7).await;
    let histogram = histogram(&collection, 5_000);

    for shape in Shape::ALL {
        let observed = histogram.frequency(Axis::Shape, shape.code());
        let expected = WEIGHTS_V1.shape.probability(*shape);
        assert!((observed - expected).abs() < 0.03, "{shape}: {observed:.3}");
    }
}

#[tokio::test]
async fn gated_axes_are_empty_below_their_tier() {
    let collection = revealed_with(31337).await;
    for item in collection.query_range(0, 1_999).unwrap() {
        let traits = item.traits.into_traits().unwrap();
        if !traits.rarity.unlocks_pompom() {
            assert!(traits.pompom.is_none(), "index {}", item.index);
        }
        if !traits.rarity.unlocks_animal() {
            assert!(traits.animal.is_none(), "index {}", item.index);
        }
    }
}
