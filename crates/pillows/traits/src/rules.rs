//! Cross-axis rules for attribute sets.
//!
//! The engine satisfies these by construction; the checks exist so that
//! tests, exports and externally supplied records can be verified against
//! the same definition.

use pillows_types::AttributeSet;

use crate::error::RuleViolation;

/// The two gates: no pompom below `Rare`, no animal below `Epic`.
pub fn check_gates(traits: &AttributeSet) -> Result<(), RuleViolation> {
    if !traits.pompom.is_none() && !traits.rarity.unlocks_pompom() {
        return Err(RuleViolation::PompomNotAllowed {
            rarity: traits.rarity,
            pompom: traits.pompom,
        });
    }
    if !traits.animal.is_none() && !traits.rarity.unlocks_animal() {
        return Err(RuleViolation::AnimalNotAllowed {
            rarity: traits.rarity,
            animal: traits.animal,
        });
    }
    Ok(())
}

/// Tiers that unlock a gated axis always carry it.
pub fn check_unlocked(traits: &AttributeSet) -> Result<(), RuleViolation> {
    if traits.rarity.unlocks_pompom() && traits.pompom.is_none() {
        return Err(RuleViolation::PompomMissing {
            rarity: traits.rarity,
        });
    }
    if traits.rarity.unlocks_animal() && traits.animal.is_none() {
        return Err(RuleViolation::AnimalMissing {
            rarity: traits.rarity,
        });
    }
    Ok(())
}

/// Every rule a derived attribute set satisfies.
pub fn check(traits: &AttributeSet) -> Result<(), RuleViolation> {
    check_gates(traits)?;
    check_unlocked(traits)
}

/// Whether the gating invariants hold.
pub fn is_valid(traits: &AttributeSet) -> bool {
    check_gates(traits).is_ok()
}
