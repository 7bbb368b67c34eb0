use pillows_types::{Animal, AttributeSet, Axis, Pompom, Seed};

use crate::rules;
use crate::weights::{WeightSet, WEIGHTS_V1};

/// Domain separation tag for the per-item digest.
pub const DERIVATION_DOMAIN: &[u8] = b"dormint-pillows-traits-v1:";

/// Derive the traits of item `index` under `seed` with the current weights.
///
/// The index is hashed as a 256-bit big-endian word, but only indices below
/// 2^64 can be expressed; larger ones are deliberately not representable.
pub fn derive(seed: &Seed, index: u64) -> AttributeSet {
    derive_with(&WEIGHTS_V1, seed, index)
}

/// Derive with an explicit weight set.
pub fn derive_with(weights: &WeightSet, seed: &Seed, index: u64) -> AttributeSet {
    let lanes = item_lanes(seed, index);
    let lane = |axis: Axis| lanes[axis.lane()];

    // Rarity first: it selects the tables for the gated axes.
    let rarity = weights.rarity.pick(lane(Axis::Rarity));

    let pompom = weights
        .pompom_for(rarity)
        .map(|table| table.pick(lane(Axis::Pompom)))
        .unwrap_or(Pompom::None);

    let animal = weights
        .animal_for(rarity)
        .map(|table| table.pick(lane(Axis::Animal)))
        .unwrap_or(Animal::None);

    let traits = AttributeSet {
        mouth: weights.mouth.pick(lane(Axis::Mouth)),
        eyes: weights.eyes.pick(lane(Axis::Eyes)),
        pattern: weights.pattern.pick(lane(Axis::Pattern)),
        rarity,
        shape: weights.shape.pick(lane(Axis::Shape)),
        pompom,
        animal,
    };

    debug_assert!(
        rules::check(&traits).is_ok(),
        "derived traits broke a gating rule: {traits:?}"
    );
    traits
}

/// One uniformly distributed 64-bit lane per axis for item `index`.
///
/// All lanes come from a single BLAKE3 XOF stream keyed by seed and index, so
/// neighbouring indices share no structure and lanes are independent.
pub fn item_lanes(seed: &Seed, index: u64) -> [u64; 7] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DERIVATION_DOMAIN);
    hasher.update(seed.as_bytes());
    hasher.update(&index_word(index));

    let mut stream = [0u8; 7 * 8];
    hasher.finalize_xof().fill(&mut stream);

    let mut lanes = [0u64; 7];
    for (lane, chunk) in lanes.iter_mut().zip(stream.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(bytes);
    }
    lanes
}

/// Index widened to a 256-bit big-endian word.
fn index_word(index: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&index.to_be_bytes());
    word
}
