use async_trait::async_trait;
use pillows_types::{CallerId, RandomWord, RequestId};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{OracleError, RevealError};

/// External source of verifiable randomness.
///
/// A request returns a correlation id right away; the random word arrives
/// later through exactly one [`RandomnessConsumer::fulfill_randomness`]
/// call made under [`oracle_id`](RandomnessOracle::oracle_id).
#[async_trait]
pub trait RandomnessOracle: Send + Sync {
    /// Identity the oracle uses when it calls back.
    fn oracle_id(&self) -> &CallerId;

    /// Ask for one random word. Any payment is settled by the oracle.
    async fn request_randomness(&self) -> Result<RequestId, OracleError>;
}

/// Receiver of oracle callbacks.
pub trait RandomnessConsumer {
    fn fulfill_randomness(
        &mut self,
        caller: &CallerId,
        request_id: RequestId,
        word: RandomWord,
    ) -> Result<(), RevealError>;
}

/// In-memory oracle for tests and local runs.
///
/// Charges a flat fee per request from a funded balance, hands out
/// sequential request ids starting at 1, and delivers words only when told
/// to via [`provide`](MockOracle::provide).
pub struct MockOracle {
    id: CallerId,
    fee: u64,
    inner: Mutex<MockOracleState>,
}

#[derive(Debug, Default)]
struct MockOracleState {
    balance: u64,
    last_request_id: u64,
    pending: Vec<RequestId>,
}

impl MockOracle {
    pub const DEFAULT_ID: &'static str = "mock-oracle";

    /// An oracle charging `fee` per request, starting with no funds.
    pub fn new(fee: u64) -> Self {
        Self::with_id(Self::DEFAULT_ID, fee)
    }

    pub fn with_id(id: impl Into<CallerId>, fee: u64) -> Self {
        Self {
            id: id.into(),
            fee,
            inner: Mutex::new(MockOracleState::default()),
        }
    }

    /// A free oracle; requests never fail for lack of funds.
    pub fn free() -> Self {
        Self::new(0)
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub async fn fund(&self, amount: u64) {
        let mut inner = self.inner.lock().await;
        inner.balance = inner.balance.saturating_add(amount);
    }

    pub async fn balance(&self) -> u64 {
        self.inner.lock().await.balance
    }

    /// Last id handed out, 0 before any request.
    pub async fn last_request_id(&self) -> u64 {
        self.inner.lock().await.last_request_id
    }

    /// Requests issued but not yet provided.
    pub async fn pending(&self) -> Vec<RequestId> {
        self.inner.lock().await.pending.clone()
    }

    /// Deliver `word` for `request_id` to `consumer`, as the oracle.
    ///
    /// The id is not checked against issued requests; the consumer decides.
    pub async fn provide<C>(
        &self,
        consumer: &mut C,
        request_id: RequestId,
        word: RandomWord,
    ) -> Result<(), RevealError>
    where
        C: RandomnessConsumer + ?Sized,
    {
        self.inner
            .lock()
            .await
            .pending
            .retain(|pending| *pending != request_id);

        debug!(oracle = %self.id, request_id = %request_id, "delivering randomness");
        consumer.fulfill_randomness(&self.id, request_id, word)
    }

    /// Deliver a freshly generated 256-bit word.
    pub async fn provide_random<C>(
        &self,
        consumer: &mut C,
        request_id: RequestId,
    ) -> Result<RandomWord, RevealError>
    where
        C: RandomnessConsumer + ?Sized,
    {
        let word = RandomWord::from_be_bytes(rand::random());
        self.provide(consumer, request_id, word).await?;
        Ok(word)
    }
}

#[async_trait]
impl RandomnessOracle for MockOracle {
    fn oracle_id(&self) -> &CallerId {
        &self.id
    }

    async fn request_randomness(&self) -> Result<RequestId, OracleError> {
        let mut inner = self.inner.lock().await;
        if inner.balance < self.fee {
            return Err(OracleError::InsufficientFunds {
                required: self.fee,
                available: inner.balance,
            });
        }
        inner.balance -= self.fee;
        inner.last_request_id += 1;
        let request_id = RequestId::new(inner.last_request_id)
            .map_err(|e| OracleError::Unavailable(e.to_string()))?;
        inner.pending.push(request_id);

        info!(
            oracle = %self.id,
            request_id = %request_id,
            fee = self.fee,
            "randomness requested"
        );
        Ok(request_id)
    }
}
