use std::sync::Arc;

use pillows_traits::{derive, WEIGHT_TABLE_VERSION};
use pillows_types::{CallerId, RandomWord, RequestId, Seed, TraitLookup, TraitRecord};
use serde::Serialize;
use tracing::{info, warn};

use crate::access::AccessPolicy;
use crate::config::QueryConfig;
use crate::error::{QueryError, QueryResult, RevealError, RevealResult};
use crate::export::collect_records;
use crate::oracle::{RandomnessConsumer, RandomnessOracle};
use crate::query::RangeQuery;
use crate::reveal::{RevealPhase, RevealState};

/// A collection whose traits are revealed once from oracle randomness.
///
/// Owns the reveal state. Traits are never stored: every lookup derives
/// them from the seed, so queries are read-only and can be issued from any
/// number of readers once the collection is shared behind a lock.
pub struct TraitCollection {
    state: RevealState,
    oracle: Arc<dyn RandomnessOracle>,
    access: Arc<dyn AccessPolicy>,
    query: QueryConfig,
}

/// Point-in-time summary of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealStatus {
    pub phase: RevealPhase,
    pub request_id: Option<RequestId>,
    /// Seed as `0x`-prefixed hex once revealed.
    pub seed: Option<String>,
    /// Traits of item 0.
    pub sample: TraitLookup,
    pub weight_table_version: u32,
}

impl TraitCollection {
    pub fn new(oracle: Arc<dyn RandomnessOracle>, access: Arc<dyn AccessPolicy>) -> Self {
        Self {
            state: RevealState::default(),
            oracle,
            access,
            query: QueryConfig::default(),
        }
    }

    /// Use `query` for every range query built from now on.
    pub fn with_config(mut self, query: QueryConfig) -> Self {
        self.query = query;
        self
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.phase()
    }

    pub fn seed(&self) -> Option<Seed> {
        self.state.seed()
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.state.request_id()
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Ask the oracle for the reveal randomness.
    ///
    /// Allowed once per collection. If the oracle refuses, the collection
    /// stays unrequested and the request may be retried.
    pub async fn request_reveal(&mut self, caller: &CallerId) -> RevealResult<RequestId> {
        if !self.access.is_authorized(caller) {
            warn!(caller = %caller, "unauthorized reveal request");
            return Err(RevealError::Unauthorized {
                caller: caller.clone(),
                action: "request the reveal",
            });
        }
        if let Err(e) = self.state.ensure_can_request() {
            warn!(caller = %caller, phase = %self.phase(), "reveal already requested");
            return Err(e);
        }

        let request_id = match self.oracle.request_randomness().await {
            Ok(request_id) => request_id,
            Err(e) => {
                warn!(caller = %caller, error = %e, "oracle rejected randomness request");
                return Err(e.into());
            }
        };

        self.state.begin(request_id)?;
        info!(caller = %caller, request_id = %request_id, "reveal requested");
        Ok(request_id)
    }

    /// Accept the oracle's random word.
    ///
    /// Only the oracle that was asked may call this, and only for the
    /// outstanding request. Rejected calls leave the collection unchanged.
    pub fn on_oracle_fulfillment(
        &mut self,
        caller: &CallerId,
        request_id: RequestId,
        word: RandomWord,
    ) -> RevealResult<Seed> {
        if caller != self.oracle.oracle_id() {
            warn!(caller = %caller, request_id = %request_id, "fulfillment from non-oracle caller");
            return Err(RevealError::Unauthorized {
                caller: caller.clone(),
                action: "fulfill randomness",
            });
        }

        match self.state.fulfill(request_id, word) {
            Ok(seed) => {
                info!(request_id = %request_id, seed = %seed, "traits revealed");
                Ok(seed)
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "fulfillment rejected");
                Err(e)
            }
        }
    }

    /// Traits of one item, unavailable until revealed.
    pub fn get_traits(&self, index: u64) -> TraitLookup {
        match self.state.seed() {
            Some(seed) => TraitLookup::Available(derive(&seed, index)),
            None => TraitLookup::Unavailable,
        }
    }

    /// Lazily derive traits for `from..=to`.
    ///
    /// Availability is fixed when the query is built: a query created before
    /// the reveal yields only unavailable items.
    pub fn query_range(&self, from: u64, to: u64) -> QueryResult<RangeQuery> {
        let query = RangeQuery::new(self.state.seed(), from, to, self.query)?;
        info!(from, to, available = query.is_available(), "range query started");
        Ok(query)
    }

    /// Validated export records for `from..=to`.
    ///
    /// Unlike [`query_range`](Self::query_range) this refuses to run before
    /// the reveal.
    pub fn export_range(&self, from: u64, to: u64) -> QueryResult<Vec<TraitRecord>> {
        let query = self.query_range(from, to)?;
        if !query.is_available() {
            warn!(from, to, "export requested before reveal");
            return Err(QueryError::NotYetRevealed);
        }
        collect_records(query)
    }

    pub fn status(&self) -> RevealStatus {
        RevealStatus {
            phase: self.phase(),
            request_id: self.request_id(),
            seed: self.seed().map(|seed| seed.to_hex()),
            sample: self.get_traits(0),
            weight_table_version: WEIGHT_TABLE_VERSION,
        }
    }
}

impl RandomnessConsumer for TraitCollection {
    fn fulfill_randomness(
        &mut self,
        caller: &CallerId,
        request_id: RequestId,
        word: RandomWord,
    ) -> Result<(), RevealError> {
        self.on_oracle_fulfillment(caller, request_id, word).map(|_| ())
    }
}

impl std::fmt::Debug for TraitCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraitCollection")
            .field("state", &self.state)
            .field("oracle", self.oracle.oracle_id())
            .field("query", &self.query)
            .finish()
    }
}
