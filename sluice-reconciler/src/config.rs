//! Reconciler configuration
//!
//! Defines all configurable parameters for the reconciler: control-plane
//! connection, desired-state and audit file locations, poll cadence, and
//! the credentials injected into connector settings.

use std::path::PathBuf;
use std::time::Duration;

use sluice_core::dto::connector::AwsCredentials;

/// Reconciler configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Control-plane base URL (e.g., "http://localhost:8080")
    pub control_plane_url: String,

    /// Path to the desired-state CSV file
    pub pipelines_path: PathBuf,

    /// Path to the append-only audit trail
    pub audit_path: PathBuf,

    /// How long to wait between reconciliation passes
    pub poll_interval: Duration,

    /// Credentials injected verbatim into every connector settings map
    pub credentials: AwsCredentials,

    /// Delete already-created resources when a provision sequence fails
    /// partway. Off by default: the baseline contract leaves the orphan
    /// behind and reports it.
    pub rollback_on_partial_failure: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(control_plane_url: String) -> Self {
        Self {
            control_plane_url,
            pipelines_path: PathBuf::from("pipelines.csv"),
            audit_path: PathBuf::from("audit.txt"),
            poll_interval: Duration::from_secs(1),
            credentials: AwsCredentials::default(),
            rollback_on_partial_failure: false,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - CONTROL_PLANE_URL (required)
    /// - PIPELINES_FILE (optional, default: pipelines.csv)
    /// - AUDIT_FILE (optional, default: audit.txt)
    /// - POLL_INTERVAL (optional, seconds, default: 1)
    /// - AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_REGION (optional,
    ///   passed through to connector settings)
    /// - ROLLBACK_ON_PARTIAL_FAILURE (optional, "true" to enable)
    pub fn from_env() -> anyhow::Result<Self> {
        let control_plane_url = std::env::var("CONTROL_PLANE_URL")
            .map_err(|_| anyhow::anyhow!("CONTROL_PLANE_URL environment variable not set"))?;

        let pipelines_path = std::env::var("PIPELINES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("pipelines.csv"));

        let audit_path = std::env::var("AUDIT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("audit.txt"));

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(1));

        let credentials = AwsCredentials {
            access_key_id: std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
            region: std::env::var("AWS_REGION").unwrap_or_default(),
        };

        let rollback_on_partial_failure = std::env::var("ROLLBACK_ON_PARTIAL_FAILURE")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            control_plane_url,
            pipelines_path,
            audit_path,
            poll_interval,
            credentials,
            rollback_on_partial_failure,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.control_plane_url.is_empty() {
            anyhow::bail!("control_plane_url cannot be empty");
        }

        if !self.control_plane_url.starts_with("http://")
            && !self.control_plane_url.starts_with("https://")
        {
            anyhow::bail!("control_plane_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.pipelines_path.as_os_str().is_empty() {
            anyhow::bail!("pipelines_path cannot be empty");
        }

        if self.audit_path.as_os_str().is_empty() {
            anyhow::bail!("audit_path cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8080".to_string())
    }
}
