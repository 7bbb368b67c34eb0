use std::collections::HashSet;

use pillows_types::CallerId;

/// Decides who may trigger the reveal request.
///
/// Role management lives outside this crate; implementations only answer
/// the yes/no question.
pub trait AccessPolicy: Send + Sync {
    fn is_authorized(&self, caller: &CallerId) -> bool;
}

/// Only the collection owner may act.
#[derive(Debug, Clone)]
pub struct OwnerOnly {
    owner: CallerId,
}

impl OwnerOnly {
    pub fn new(owner: impl Into<CallerId>) -> Self {
        Self {
            owner: owner.into(),
        }
    }

    pub fn owner(&self) -> &CallerId {
        &self.owner
    }
}

impl AccessPolicy for OwnerOnly {
    fn is_authorized(&self, caller: &CallerId) -> bool {
        *caller == self.owner
    }
}

/// A fixed set of permitted callers.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    allowed: HashSet<CallerId>,
}

impl AllowList {
    pub fn new<I, C>(callers: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CallerId>,
    {
        Self {
            allowed: callers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl AccessPolicy for AllowList {
    fn is_authorized(&self, caller: &CallerId) -> bool {
        self.allowed.contains(caller)
    }
}
