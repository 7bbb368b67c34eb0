use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSet;
use crate::error::TypeError;

/// Result of asking for one pillow's traits.
///
/// Serializes as `{ "available": bool, "traits": AttributeSet | null }`, the
/// shape external consumers already read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LookupWire", into = "LookupWire")]
pub enum TraitLookup {
    /// The collection has not been revealed yet.
    Unavailable,
    Available(AttributeSet),
}

impl TraitLookup {
    pub fn is_available(&self) -> bool {
        matches!(self, TraitLookup::Available(_))
    }

    pub fn traits(&self) -> Option<&AttributeSet> {
        match self {
            TraitLookup::Available(traits) => Some(traits),
            TraitLookup::Unavailable => None,
        }
    }

    pub fn into_traits(self) -> Option<AttributeSet> {
        match self {
            TraitLookup::Available(traits) => Some(traits),
            TraitLookup::Unavailable => None,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct LookupWire {
    available: bool,
    #[serde(default)]
    traits: Option<AttributeSet>,
}

impl From<TraitLookup> for LookupWire {
    fn from(lookup: TraitLookup) -> Self {
        Self {
            available: lookup.is_available(),
            traits: lookup.into_traits(),
        }
    }
}

impl TryFrom<LookupWire> for TraitLookup {
    type Error = TypeError;

    fn try_from(wire: LookupWire) -> Result<Self, Self::Error> {
        match (wire.available, wire.traits) {
            (true, Some(traits)) => Ok(TraitLookup::Available(traits)),
            (true, None) => Err(TypeError::MissingTraits),
            // Traits attached to an unavailable lookup are ignored.
            (false, _) => Ok(TraitLookup::Unavailable),
        }
    }
}
