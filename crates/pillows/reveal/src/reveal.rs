use chrono::{DateTime, Utc};
use pillows_types::{RandomWord, RequestId, Seed};
use serde::{Deserialize, Serialize};

use crate::error::RevealError;

/// Coarse lifecycle phase, without the data each state carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    Unrequested,
    Requested,
    Fulfilled,
}

impl std::fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RevealPhase::Unrequested => "unrequested",
            RevealPhase::Requested => "requested",
            RevealPhase::Fulfilled => "fulfilled",
        };
        f.write_str(name)
    }
}

/// The reveal lifecycle.
///
/// The outstanding request id lives only in `Requested`, so a fulfillment can
/// only ever be matched against a request that is actually pending.
/// `Fulfilled` keeps the id it was fulfilled by for status reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Unrequested,
    Requested {
        request_id: RequestId,
        requested_at: DateTime<Utc>,
    },
    Fulfilled {
        request_id: RequestId,
        seed: Seed,
        fulfilled_at: DateTime<Utc>,
    },
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        match self {
            RevealState::Unrequested => RevealPhase::Unrequested,
            RevealState::Requested { .. } => RevealPhase::Requested,
            RevealState::Fulfilled { .. } => RevealPhase::Fulfilled,
        }
    }

    pub fn seed(&self) -> Option<Seed> {
        match self {
            RevealState::Fulfilled { seed, .. } => Some(*seed),
            _ => None,
        }
    }

    /// Id of the pending or completed request, `None` before the first one.
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            RevealState::Unrequested => None,
            RevealState::Requested { request_id, .. }
            | RevealState::Fulfilled { request_id, .. } => Some(*request_id),
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Fulfilled { .. })
    }

    /// Fails with `AlreadyRequested` unless no request was ever made.
    pub fn ensure_can_request(&self) -> Result<(), RevealError> {
        match self {
            RevealState::Unrequested => Ok(()),
            _ => Err(RevealError::AlreadyRequested),
        }
    }

    /// `Unrequested -> Requested`.
    pub fn begin(&mut self, request_id: RequestId) -> Result<(), RevealError> {
        self.ensure_can_request()?;
        *self = RevealState::Requested {
            request_id,
            requested_at: Utc::now(),
        };
        Ok(())
    }

    /// `Requested -> Fulfilled`.
    ///
    /// Every failure leaves the state untouched.
    pub fn fulfill(
        &mut self,
        request_id: RequestId,
        word: RandomWord,
    ) -> Result<Seed, RevealError> {
        let expected = match *self {
            RevealState::Fulfilled { .. } => return Err(RevealError::AlreadyFulfilled),
            RevealState::Unrequested => {
                return Err(RevealError::UnknownRequest {
                    expected: None,
                    received: request_id,
                })
            }
            RevealState::Requested {
                request_id: expected,
                ..
            } => expected,
        };

        if expected != request_id {
            return Err(RevealError::UnknownRequest {
                expected: Some(expected),
                received: request_id,
            });
        }

        let seed = Seed::new(word).map_err(|_| RevealError::InvalidRandomness { request_id })?;

        *self = RevealState::Fulfilled {
            request_id,
            seed,
            fulfilled_at: Utc::now(),
        };
        Ok(seed)
    }
}
