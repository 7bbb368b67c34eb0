use pillows_types::{Animal, Pompom, Rarity};
use thiserror::Error;

/// A cross-axis rule broken by an attribute set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("pompom {pompom} not allowed for {rarity} rarity")]
    PompomNotAllowed { rarity: Rarity, pompom: Pompom },

    #[error("animal {animal} not allowed for {rarity} rarity")]
    AnimalNotAllowed { rarity: Rarity, animal: Animal },

    #[error("{rarity} rarity requires a pompom")]
    PompomMissing { rarity: Rarity },

    #[error("{rarity} rarity requires an animal")]
    AnimalMissing { rarity: Rarity },
}
