use pillows_traits::RuleViolation;
use pillows_types::{CallerId, RequestId};
use thiserror::Error;

/// Rejected reveal transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("caller {caller} is not authorized to {action}")]
    Unauthorized {
        caller: CallerId,
        action: &'static str,
    },

    #[error("randomness already requested")]
    AlreadyRequested,

    #[error("randomness already fulfilled")]
    AlreadyFulfilled,

    #[error("unknown randomness request {received} (outstanding: {expected:?})")]
    UnknownRequest {
        expected: Option<RequestId>,
        received: RequestId,
    },

    #[error("oracle delivered zero randomness for request {request_id}")]
    InvalidRandomness { request_id: RequestId },

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Failures reported by a randomness oracle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("insufficient oracle funding: fee {required}, balance {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

/// Errors from trait queries and exports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid range: to ({to}) is less than from ({from})")]
    InvalidRange { from: u64, to: u64 },

    #[error("index {index} outside query window {from}..={to}")]
    OutOfWindow { index: u64, from: u64, to: u64 },

    #[error("traits are not revealed yet")]
    NotYetRevealed,

    #[error("item {index} broke a trait rule: {violation}")]
    RuleViolation { index: u64, violation: RuleViolation },
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type RevealResult<T> = Result<T, RevealError>;
pub type QueryResult<T> = Result<T, QueryError>;
