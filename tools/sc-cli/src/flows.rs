//! Role flows over one in-process ledger.

use sc_01_batch_ledger::{
    Batch, BatchHistory, CreateBatchResult, InMemoryBatchStore, LedgerApi, LedgerConfig,
    LedgerError, LedgerService, QueryApi, TxReceipt, DEMO_DISTRIBUTOR, DEMO_MANUFACTURER,
    DEMO_RETAILER,
};
use sc_02_integrity::{IntegrityApi, IntegrityConfig, IntegrityError, IntegrityReport, IntegrityService};
use sc_shared_types::{BatchId, Role, DEMO_PRODUCT_NAME};
use sc_telemetry::{log_batch_event, log_event};
use serde::Serialize;
use thiserror::Error;

use crate::SUBSYSTEM;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Inputs of the scripted end-to-end run.
#[derive(Clone, Debug)]
pub struct DemoScript {
    pub product_name: String,
    pub batch_size: u32,
    pub origin: String,
    pub manufacturer: String,
    pub distributor: String,
    pub transit_location: String,
    pub retailer: String,
    pub destination: String,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            product_name: DEMO_PRODUCT_NAME.to_string(),
            batch_size: 500,
            origin: "Medellin, Colombia".to_string(),
            manufacturer: DEMO_MANUFACTURER.to_string(),
            distributor: DEMO_DISTRIBUTOR.to_string(),
            transit_location: "Miami, FL".to_string(),
            retailer: DEMO_RETAILER.to_string(),
            destination: "New York, NY".to_string(),
        }
    }
}

/// What a consumer sees after scanning a batch.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub batch: Batch,
    pub history: BatchHistory,
    pub integrity: IntegrityReport,
    pub link: String,
}

/// Receipts of every step of the scripted run, plus the consumer's view.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoOutcome {
    pub created: CreateBatchResult,
    pub transfer: TxReceipt,
    pub confirmation: TxReceipt,
    pub verification: Verification,
}

/// Ledger plus integrity evaluator, shared by every command.
pub struct Tracker {
    ledger: LedgerService<InMemoryBatchStore>,
    integrity: IntegrityService,
}

impl Tracker {
    /// Build both services from configuration.
    pub fn new(
        ledger_config: LedgerConfig,
        integrity_config: IntegrityConfig,
    ) -> Result<Self, CliError> {
        Ok(Self::with_services(
            LedgerService::in_memory(ledger_config)?,
            IntegrityService::new(integrity_config)?,
        ))
    }

    /// Use pre-built services.
    pub fn with_services(
        ledger: LedgerService<InMemoryBatchStore>,
        integrity: IntegrityService,
    ) -> Self {
        Self { ledger, integrity }
    }

    /// The ledger.
    pub fn ledger(&self) -> &LedgerService<InMemoryBatchStore> {
        &self.ledger
    }

    /// The integrity evaluator.
    pub fn integrity(&self) -> &IntegrityService {
        &self.integrity
    }

    /// Verify link a QR code on the batch would carry.
    pub fn link(&self, batch_id: &str) -> String {
        self.ledger.deep_link(&BatchId::from(batch_id.trim()))
    }

    /// Resolve a scanned link or typed id and gather the consumer view.
    ///
    /// # Errors
    /// - `Ledger(NotFound)`: unknown id without the demo marker
    pub async fn verify(&self, link_or_id: &str) -> Result<Verification, CliError> {
        let batch_id = self.ledger.resolve_link(link_or_id);
        log_batch_event!(debug, SUBSYSTEM, "verifying batch", batch_id, role = %Role::Consumer);

        let batch = self.ledger.get_batch(&batch_id).await?;
        let history = self.ledger.get_history(&batch_id).await;
        let integrity = self.integrity.evaluate(&batch_id).await;

        Ok(Verification {
            link: self.ledger.deep_link(&batch_id),
            batch,
            history,
            integrity,
        })
    }

    /// Manufacturer creates, distributor transfers, retailer confirms,
    /// consumer verifies. Each role connects its own session first.
    pub async fn run_demo(&self, script: &DemoScript) -> Result<DemoOutcome, CliError> {
        self.act_as(Role::Manufacturer, &script.manufacturer).await?;
        let created = self
            .ledger
            .create_batch(
                &script.product_name,
                script.batch_size,
                &script.origin,
                &script.manufacturer,
            )
            .await?;
        let batch_id = created.batch.batch_id.clone();

        self.act_as(Role::Distributor, &script.distributor).await?;
        let transfer = self
            .ledger
            .transfer_batch(&batch_id, &script.distributor, &script.transit_location)
            .await?;

        self.act_as(Role::Retailer, &script.retailer).await?;
        let confirmation = self
            .ledger
            .confirm_receipt(&batch_id, &script.destination, &script.retailer)
            .await?;
        self.ledger.disconnect();

        let verification = self.verify(&self.ledger.deep_link(&batch_id)).await?;
        log_batch_event!(
            info,
            SUBSYSTEM,
            "demo run complete",
            batch_id,
            status = %verification.batch.status,
            score = verification.integrity.score
        );

        Ok(DemoOutcome {
            created,
            transfer,
            confirmation,
            verification,
        })
    }

    async fn act_as(&self, role: Role, address: &str) -> Result<(), CliError> {
        let session = self.ledger.connect(address).await?;
        log_event!(info, SUBSYSTEM, "role connected", role = %role, signer = %session.signer.short());
        Ok(())
    }
}
