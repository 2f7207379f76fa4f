//! Ledger Service
//!
//! Implements `LedgerApi` and `QueryApi` over injected ports.
//!
//! ## Transition flow
//!
//! 1. Session, existence and input checks (nothing is mutated on failure)
//! 2. Artificial delay from the latency profile
//! 3. Timestamp, mutate, store, publish
//!
//! Transitions on the same batch are serialized; the per-batch lock is held
//! from the batch read until the batch is stored again. Unknown ids are
//! rejected before a lock is created for them.

use super::batch_locks::BatchLocks;
use crate::adapters::{InMemoryBatchStore, RandomIdGenerator};
use crate::domain::{
    batch_is_consistent, demo_batch, invariant_append_only, demo_history, Batch, BatchHistory, CreateBatchResult,
    HistoryAction, HistoryEvent, LedgerConfig, LedgerError, NewBatch, PartySummary, Session,
    TxReceipt,
};
use crate::events::{LedgerEvent, TransitionRecord};
use crate::metrics::{LedgerMetrics, LedgerMetricsSnapshot};
use crate::ports::inbound::{LedgerApi, QueryApi};
use crate::ports::outbound::{
    BatchStore, IdGenerator, LedgerEventPublisher, NoOpEventPublisher, SystemTimeSource,
    TimeSource,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use sc_shared_types::latency::simulate;
use sc_shared_types::{
    generate_deep_link, parse_batch_id_from_link, BatchId, PartyAddress, Timestamp, TxHash,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Downstream transitions on an existing batch.
#[derive(Clone, Copy, Debug)]
enum Hop {
    Transfer,
    Confirm,
}

impl Hop {
    fn action(self) -> HistoryAction {
        match self {
            Hop::Transfer => HistoryAction::Transferred,
            Hop::Confirm => HistoryAction::Confirmed,
        }
    }
}

/// Batch ledger service.
///
/// One instance is constructed at startup and shared by handle
/// (`Arc<LedgerService<_>>`) with every surface that needs it.
pub struct LedgerService<S: BatchStore> {
    store: Arc<S>,
    clock: Arc<dyn TimeSource>,
    ids: Arc<dyn IdGenerator>,
    publisher: Arc<dyn LedgerEventPublisher>,
    config: LedgerConfig,
    session: RwLock<Option<Session>>,
    locks: BatchLocks,
    metrics: LedgerMetrics,
}

impl LedgerService<InMemoryBatchStore> {
    /// Service over a fresh in-memory store.
    pub fn in_memory(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::new(Arc::new(InMemoryBatchStore::new()), config)
    }
}

impl<S: BatchStore> LedgerService<S> {
    /// Create a service with the system clock, random ids and no event
    /// delivery.
    ///
    /// # Errors
    /// - `InvalidConfig`: `config.validate()` failed
    pub fn new(store: Arc<S>, config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            store,
            clock: Arc::new(SystemTimeSource),
            ids: Arc::new(RandomIdGenerator::from_entropy()),
            publisher: Arc::new(NoOpEventPublisher::default()),
            config,
            session: RwLock::new(None),
            locks: BatchLocks::default(),
            metrics: LedgerMetrics::new(),
        })
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the id generator.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the event publisher.
    pub fn with_event_publisher(mut self, publisher: Arc<dyn LedgerEventPublisher>) -> Self {
        self.publisher = publisher;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Counter values.
    pub fn metrics(&self) -> LedgerMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Verify link for a batch, as encoded into its QR code.
    pub fn deep_link(&self, batch_id: &BatchId) -> String {
        generate_deep_link(&self.config.app_base_url, batch_id)
    }

    /// Batch id from scanned or typed text.
    pub fn resolve_link(&self, text: &str) -> BatchId {
        parse_batch_id_from_link(text)
    }

    fn require_session(&self) -> Result<Session, LedgerError> {
        self.session.read().clone().ok_or(LedgerError::NotInitialized)
    }

    fn parse_party(input: &str) -> Result<PartyAddress, LedgerError> {
        Ok(PartyAddress::parse(input.trim())?)
    }

    fn rejected(&self, operation: &'static str, batch_id: Option<&BatchId>, err: &LedgerError) {
        self.metrics.record_failure();
        match batch_id {
            Some(batch_id) => warn!(operation, %batch_id, error = %err, "[sc-01] transition rejected"),
            None => warn!(operation, error = %err, "[sc-01] transition rejected"),
        }
    }

    async fn announce(&self, batch_id: &BatchId, event: &HistoryEvent, tx_hash: &TxHash) {
        let record = TransitionRecord::new(batch_id.clone(), event, tx_hash.clone());
        self.publisher
            .publish(LedgerEvent::from_action(event.action, record))
            .await;
    }

    /// Store the batch under the first unused id the generator yields.
    fn insert_fresh(&self, params: NewBatch, now: Timestamp) -> Result<Batch, LedgerError> {
        let attempts = self.config.max_id_attempts;
        for attempt in 1..=attempts {
            let batch = Batch::create(params.clone(), self.ids.batch_id(now), now);
            match self.store.insert_new(batch.clone()) {
                Ok(()) => return Ok(batch),
                Err(taken) => {
                    debug!(batch_id = %taken.batch_id, attempt, "[sc-01] batch id taken, redrawing");
                }
            }
        }
        Err(LedgerError::IdExhausted { attempts })
    }

    async fn create(
        &self,
        product_name: &str,
        batch_size: u32,
        location: &str,
        creator: &str,
    ) -> Result<CreateBatchResult, LedgerError> {
        self.require_session()?;
        let params = NewBatch::validate(product_name, batch_size, location, creator)?;

        simulate(self.config.latency.transaction).await;

        let now = self.clock.now();
        let batch = self.insert_fresh(params, now)?;
        debug_assert!(batch_is_consistent(&batch));

        let tx_hash = self.ids.tx_hash();
        let receipt = TxReceipt {
            batch_id: batch.batch_id.clone(),
            tx_hash: tx_hash.clone(),
            action: HistoryAction::Created,
            timestamp: now,
            success: true,
        };

        info!(
            batch_id = %batch.batch_id,
            handler = %batch.manufacturer,
            status = %batch.status,
            "[sc-01] batch created"
        );
        self.metrics.record_action(HistoryAction::Created);
        self.announce(&batch.batch_id, &batch.history[0], &tx_hash).await;

        Ok(CreateBatchResult { batch, receipt })
    }

    async fn hop(
        &self,
        hop: Hop,
        batch_id: &BatchId,
        party: &str,
        location: &str,
    ) -> Result<TxReceipt, LedgerError> {
        self.require_session()?;
        // Batches are never removed, so an absent id cannot appear under the lock.
        if !self.store.contains(batch_id) {
            return Err(LedgerError::NotFound(batch_id.clone()));
        }

        let (batch, event) = {
            let _guard = self.locks.acquire(batch_id).await;

            let mut batch = self.store.get(batch_id)?;
            let party = Self::parse_party(party)?;
            if let Hop::Transfer = hop {
                batch.ensure_transferable()?;
            }

            simulate(self.config.latency.transaction).await;

            let now = self.clock.now();
            let before = batch.history.clone();
            let event = match hop {
                Hop::Transfer => batch.transfer(party, location, now)?.clone(),
                Hop::Confirm => batch.confirm(party, location, now).clone(),
            };
            debug_assert!(invariant_append_only(&before, &batch.history));
            debug_assert!(batch_is_consistent(&batch));

            self.store.put(batch.clone());
            (batch, event)
        };

        let tx_hash = self.ids.tx_hash();
        info!(
            batch_id = %batch_id,
            handler = %event.handler,
            status = %batch.status,
            action = %event.action,
            "[sc-01] custody updated"
        );
        self.metrics.record_action(hop.action());
        self.announce(batch_id, &event, &tx_hash).await;

        Ok(TxReceipt {
            batch_id: batch_id.clone(),
            tx_hash,
            action: event.action,
            timestamp: event.timestamp,
            success: true,
        })
    }
}

#[async_trait]
impl<S: BatchStore + 'static> LedgerApi for LedgerService<S> {
    async fn connect(&self, signer: &str) -> Result<Session, LedgerError> {
        let signer = Self::parse_party(signer)?;

        simulate(self.config.latency.connect).await;

        let session = Session {
            signer,
            connected_at: self.clock.now(),
        };
        *self.session.write() = Some(session.clone());
        info!(signer = %session.signer, "[sc-01] session connected");
        Ok(session)
    }

    fn disconnect(&self) {
        if let Some(session) = self.session.write().take() {
            info!(signer = %session.signer, "[sc-01] session closed");
        }
    }

    fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    async fn create_batch(
        &self,
        product_name: &str,
        batch_size: u32,
        location: &str,
        creator: &str,
    ) -> Result<CreateBatchResult, LedgerError> {
        let result = self
            .create(product_name, batch_size, location, creator)
            .await;
        if let Err(err) = &result {
            self.rejected("create_batch", None, err);
        }
        result
    }

    async fn transfer_batch(
        &self,
        batch_id: &BatchId,
        next_handler: &str,
        location: &str,
    ) -> Result<TxReceipt, LedgerError> {
        let result = self.hop(Hop::Transfer, batch_id, next_handler, location).await;
        if let Err(err) = &result {
            self.rejected("transfer_batch", Some(batch_id), err);
        }
        result
    }

    async fn confirm_receipt(
        &self,
        batch_id: &BatchId,
        location: &str,
        confirming_party: &str,
    ) -> Result<TxReceipt, LedgerError> {
        let result = self
            .hop(Hop::Confirm, batch_id, confirming_party, location)
            .await;
        if let Err(err) = &result {
            self.rejected("confirm_receipt", Some(batch_id), err);
        }
        result
    }
}

#[async_trait]
impl<S: BatchStore + 'static> QueryApi for LedgerService<S> {
    async fn get_batch(&self, batch_id: &BatchId) -> Result<Batch, LedgerError> {
        simulate(self.config.latency.read).await;

        match self.store.get(batch_id) {
            Ok(batch) => {
                debug!(%batch_id, status = %batch.status, "[sc-01] batch read");
                Ok(batch)
            }
            Err(LedgerError::NotFound(_)) if batch_id.is_demo() => {
                debug!(%batch_id, "[sc-01] serving demo batch");
                Ok(demo_batch(self.clock.now()))
            }
            Err(err) => Err(err),
        }
    }

    async fn get_history(&self, batch_id: &BatchId) -> BatchHistory {
        simulate(self.config.latency.history).await;

        match self.store.get(batch_id) {
            Ok(batch) => BatchHistory::of(&batch),
            Err(_) if batch_id.is_demo() => demo_history(batch_id.clone(), self.clock.now()),
            Err(_) => {
                debug!(%batch_id, "[sc-01] history of unknown batch is empty");
                BatchHistory::empty(batch_id.clone())
            }
        }
    }

    async fn list_by_party(&self, address: &str) -> Result<Vec<Batch>, LedgerError> {
        let address = Self::parse_party(address)?;
        simulate(self.config.latency.read).await;
        Ok(self.store.list_by_party(&address))
    }

    async fn summary_for(&self, address: &str) -> Result<PartySummary, LedgerError> {
        let batches = self.list_by_party(address).await?;
        Ok(PartySummary {
            address: Self::parse_party(address)?,
            total_batches: batches.len(),
            active_batches: batches.iter().filter(|b| b.status.is_active()).count(),
        })
    }
}
