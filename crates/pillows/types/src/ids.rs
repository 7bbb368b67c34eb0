use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Correlation id linking an oracle request to its fulfillment callback.
///
/// Issued by the oracle; never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(NonZeroU64);

impl RequestId {
    pub fn new(raw: u64) -> Result<Self, TypeError> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or(TypeError::ZeroRequestId)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Identity of whoever invokes an operation: an operator, the owner, or the
/// oracle itself when it calls back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
