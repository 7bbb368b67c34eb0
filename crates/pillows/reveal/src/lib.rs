//! Randomness reveal protocol and trait queries for Dormint Pillows.
//!
//! A [`TraitCollection`] owns the one-shot reveal lifecycle:
//!
//! ```text
//! Unrequested --request_reveal--> Requested{request_id} --fulfillment--> Fulfilled{seed}
//! ```
//!
//! - Only callers accepted by the [`AccessPolicy`] may request the reveal,
//!   and only once.
//! - Only the [`RandomnessOracle`] that issued the request may fulfil it, and
//!   only with the matching request id and a non-zero word.
//! - `Fulfilled` is terminal. Every later callback is rejected.
//!
//! Until the seed arrives every query answers [`TraitLookup::Unavailable`].
//! Afterwards traits are derived on demand by `pillows-traits`; nothing per
//! item is stored.
//!
//! Range queries ([`RangeQuery`]) stream a window of indices chunk by chunk,
//! deriving each chunk in parallel and reporting coarse progress.

pub mod access;
pub mod collection;
pub mod config;
pub mod error;
pub mod export;
pub mod oracle;
pub mod query;
pub mod reveal;
pub mod telemetry;

pub use access::{AccessPolicy, AllowList, OwnerOnly};
pub use collection::{RevealStatus, TraitCollection};
pub use config::{LoggingConfig, QueryConfig, TraitsConfig};
pub use error::{ConfigError, OracleError, QueryError, RevealError};
pub use export::{collect_records, records_to_json};
pub use oracle::{MockOracle, RandomnessConsumer, RandomnessOracle};
pub use query::{Progress, RangeItem, RangeQuery};
pub use reveal::{RevealPhase, RevealState};
pub use telemetry::init_tracing;

pub use pillows_types::{
    AttributeSet, CallerId, RandomWord, RequestId, Seed, TraitLookup, TraitRecord,
};
