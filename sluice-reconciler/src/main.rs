//! Sluice Reconciler
//!
//! Converges a remote pipeline control plane toward an operator-declared
//! set of data-movement pipelines.
//!
//! Architecture:
//! - Configuration: settings from environment or defaults
//! - Desired state: CSV file declaring the pipelines that should exist
//! - Control plane: HTTP client driving pipeline/connector lifecycles
//! - Reconciler: per-pass diff of desired vs. tracked state, provisioning
//!   additions and tearing down removals
//! - Audit: append-only trail of every lifecycle transition
//!
//! The process polls the desired-state file on a fixed interval and runs
//! until terminated externally.

mod audit;
mod config;
mod control_plane;
mod desired;
mod reconciler;

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::audit::AuditLog;
use crate::config::Config;
use crate::desired::DesiredStateReader;
use crate::reconciler::Reconciler;
use sluice_client::ControlPlaneClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sluice_reconciler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sluice Reconciler");

    let config = load_config()?;
    info!(
        "Loaded configuration: control_plane_url={}, pipelines_file={}, poll_interval={:?}",
        config.control_plane_url,
        config.pipelines_path.display(),
        config.poll_interval
    );

    let client = Arc::new(ControlPlaneClient::new(config.control_plane_url.clone()));
    info!("Control-plane client initialized");

    let reader = DesiredStateReader::new(config.pipelines_path.clone());
    let audit = AuditLog::new(config.audit_path.clone());

    let mut reconciler = Reconciler::new(config, client, reader, audit);

    info!("Starting reconciliation loop");
    if let Err(e) = reconciler.run().await {
        error!("Reconciler error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Loads configuration from environment variables with fallback to defaults
fn load_config() -> Result<Config> {
    match Config::from_env() {
        Ok(config) => {
            config.validate()?;
            Ok(config)
        }
        Err(_) => {
            info!("Failed to load config from environment, using defaults");
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}
