use thiserror::Error;

use crate::attributes::Axis;

/// Errors raised while constructing core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown {axis} code: {code}")]
    UnknownCode { axis: Axis, code: u8 },

    #[error("random word is zero and cannot be used as a seed")]
    ZeroSeed,

    #[error("request id must be non-zero")]
    ZeroRequestId,

    #[error("invalid hex word: {0}")]
    InvalidHex(String),

    #[error("lookup marked available without traits")]
    MissingTraits,
}
