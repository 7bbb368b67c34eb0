//! Core value types for Dormint Pillows traits.
//!
//! Every pillow in the collection carries seven categorical attributes. The
//! types in this crate describe those attributes, the 256-bit reveal seed that
//! drives them, and the identifiers exchanged with the randomness oracle.
//!
//! ## Gated axes
//!
//! `rarity` is the base axis. Two axes are gated on it:
//!
//! - **pompom** is only ever set for `Rare`, `Epic` and `Legendary` pillows.
//! - **animal** is only ever set for `Epic` and `Legendary` pillows.
//!
//! The gates are enforced by the derivation engine in `pillows-traits`; the
//! types here only expose [`Rarity::unlocks_pompom`] and
//! [`Rarity::unlocks_animal`] so that every consumer reads the same rule.

pub mod attributes;
pub mod error;
pub mod ids;
pub mod lookup;
pub mod record;
pub mod seed;

pub use attributes::{Animal, AttributeSet, Axis, Eyes, Mouth, Pattern, Pompom, Rarity, Shape};
pub use error::TypeError;
pub use ids::{CallerId, RequestId};
pub use lookup::TraitLookup;
pub use record::TraitRecord;
pub use seed::{RandomWord, Seed};
