//! Trait derivation for Dormint Pillows.
//!
//! `derive(seed, index)` is a pure function: the same seed and index give
//! the same [`AttributeSet`](pillows_types::AttributeSet) on every machine,
//! forever. Nothing about an item is stored.
//!
//! ## How an item is derived
//!
//! 1. BLAKE3 over a versioned domain tag, the 32-byte seed and the index
//!    widened to a 32-byte big-endian word.
//! 2. The extendable output is split into one 64-bit lane per axis.
//! 3. Each lane is reduced modulo its axis' total weight and located in the
//!    cumulative weight table.
//!
//! Rarity is derived first. Pompom and animal are then drawn from tables
//! chosen by the rarity tier, or fixed to `None` when the tier does not
//! unlock them, so gated combinations are impossible by construction and no
//! draw is ever rejected and repeated.
//!
//! ## Compatibility
//!
//! The domain tag, the lane layout and [`WEIGHTS_V1`] together define the
//! derivation. Changing any of them reassigns every pillow's traits and
//! requires a new [`WEIGHT_TABLE_VERSION`].

pub mod engine;
pub mod error;
pub mod histogram;
pub mod rules;
pub mod weights;

pub use engine::{derive, derive_with, item_lanes, DERIVATION_DOMAIN};
pub use error::RuleViolation;
pub use histogram::AxisHistogram;
pub use rules::{check, check_gates, check_unlocked, is_valid};
pub use weights::{WeightSet, WeightTable, WEIGHTS_V1, WEIGHT_TABLE_VERSION};
