//! SC-CLI: Supply-chain tracker command-line driver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sc_01_batch_ledger::LedgerConfig;
use sc_02_integrity::IntegrityConfig;
use sc_cli::{render, DemoScript, Tracker};
use sc_shared_types::LatencyProfile;
use sc_telemetry::{init_telemetry, TelemetryConfig};
use serde::Serialize;

/// SC-CLI: Supply-chain tracker
#[derive(Parser, Debug)]
#[command(name = "sc-cli", version)]
#[command(about = "Create, hand over and verify product batches on an in-memory ledger")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Pace operations like the demo dashboards
    #[arg(long, global = true)]
    latency: bool,

    /// Base URL embedded in verify links (overrides SC_APP_URL)
    #[arg(long, global = true)]
    app_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run manufacturer -> distributor -> retailer -> consumer end to end
    Demo,
    /// Show batch, timeline and integrity for a scanned link or batch id
    Verify {
        /// `{app_url}/verify/{batch_id}` or a bare batch id
        link_or_id: String,
    },
    /// Print the verify link a batch's QR code carries
    Link {
        /// Batch id
        batch_id: String,
    },
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize output")?
        );
    } else {
        print!("{}", text(value));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let telemetry = TelemetryConfig::from_env();
    let _telemetry = init_telemetry(&telemetry).context("Failed to initialize logging")?;

    let mut ledger_config = LedgerConfig::from_env();
    let mut integrity_config = IntegrityConfig::from_env();
    if cli.latency {
        ledger_config = ledger_config.with_latency(LatencyProfile::demo());
        integrity_config = integrity_config.with_latency(LatencyProfile::demo());
    }
    if let Some(url) = cli.app_url {
        ledger_config = ledger_config.with_app_base_url(url);
    }

    let tracker =
        Tracker::new(ledger_config, integrity_config).context("Invalid configuration")?;

    match cli.command {
        Command::Demo => {
            let outcome = tracker
                .run_demo(&DemoScript::default())
                .await
                .context("Demo run failed")?;
            emit(cli.json, &outcome, render::demo)
        }
        Command::Verify { link_or_id } => {
            let view = tracker
                .verify(&link_or_id)
                .await
                .with_context(|| format!("Could not verify {link_or_id:?}"))?;
            emit(cli.json, &view, render::verification)
        }
        Command::Link { batch_id } => {
            let link = tracker.link(&batch_id);
            emit(cli.json, &link, |l| format!("{l}\n"))
        }
    }
}
