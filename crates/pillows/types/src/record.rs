use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSet;
use crate::error::TypeError;

/// Flat export record: one pillow, every axis as its numeric code.
///
/// This is the artifact external tooling consumes, so field names and code
/// values are a stable format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraitRecord {
    pub index: u64,
    pub mouth: u8,
    pub eyes: u8,
    pub pattern: u8,
    pub rarity: u8,
    pub shape: u8,
    pub pompom: u8,
    pub animal: u8,
}

impl TraitRecord {
    pub fn new(index: u64, traits: &AttributeSet) -> Self {
        Self {
            index,
            mouth: traits.mouth.code(),
            eyes: traits.eyes.code(),
            pattern: traits.pattern.code(),
            rarity: traits.rarity.code(),
            shape: traits.shape.code(),
            pompom: traits.pompom.code(),
            animal: traits.animal.code(),
        }
    }

    /// Decode the record back into typed attributes.
    pub fn attributes(&self) -> Result<AttributeSet, TypeError> {
        AttributeSet::from_codes([
            self.mouth,
            self.eyes,
            self.pattern,
            self.rarity,
            self.shape,
            self.pompom,
            self.animal,
        ])
    }
}
