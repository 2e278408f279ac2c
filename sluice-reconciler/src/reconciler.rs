//! Reconciler
//!
//! Diffs the declared pipeline set against the pipelines this process has
//! already provisioned and converges the control plane toward the declared
//! set: additions are provisioned (pipeline, both connectors, start) and
//! removals are torn down (stop, both connectors, pipeline).
//!
//! Every control-plane failure is handled at the call site: logged, written
//! to the audit trail, and the pass moves on. Nothing here ever aborts the
//! process.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use tokio::time;
use tracing::{debug, error, info};

use sluice_core::domain::connector::Connector;
use sluice_core::domain::pipeline::TrackedPipeline;
use sluice_core::domain::spec::DesiredPipelineSpec;
use sluice_core::dto::connector::CreateConnectorRequest;
use sluice_core::dto::pipeline::CreatePipelineRequest;

use crate::audit::AuditLog;
use crate::config::Config;
use crate::control_plane::ControlPlane;
use crate::desired::DesiredStateReader;

/// Converges the control plane toward the declared pipeline set
///
/// Tracked state is owned by this instance and mutated only inside a
/// reconciliation pass. It records this process's own successful writes;
/// the control plane is never re-queried.
pub struct Reconciler {
    config: Config,
    control_plane: Arc<dyn ControlPlane>,
    reader: DesiredStateReader,
    audit: AuditLog,
    tracked: Vec<TrackedPipeline>,
}

impl Reconciler {
    /// Creates a reconciler with empty tracked state
    pub fn new(
        config: Config,
        control_plane: Arc<dyn ControlPlane>,
        reader: DesiredStateReader,
        audit: AuditLog,
    ) -> Self {
        Self {
            config,
            control_plane,
            reader,
            audit,
            tracked: Vec::new(),
        }
    }

    /// Seeds the tracked state, replacing whatever was there
    #[allow(dead_code)]
    pub fn with_tracked(mut self, tracked: Vec<TrackedPipeline>) -> Self {
        self.tracked = tracked;
        self
    }

    /// The pipelines currently believed provisioned, in insertion order
    #[allow(dead_code)]
    pub fn tracked(&self) -> &[TrackedPipeline] {
        &self.tracked
    }

    /// Runs reconciliation passes until the process is terminated
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting reconciliation loop (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Starting reconciliation pass");

            if let Err(e) = self.reconcile_once().await {
                error!("Error during reconciliation pass: {:#}", e);
            }
        }
    }

    /// Performs a single reconciliation pass
    ///
    /// Additions are processed before removals so a renamed pipeline
    /// converges within one pass.
    pub async fn reconcile_once(&mut self) -> Result<()> {
        let desired = self.reader.read()?;

        let desired_names: HashSet<&str> = desired.iter().map(|s| s.name.as_str()).collect();
        let tracked_names: HashSet<String> =
            self.tracked.iter().map(|t| t.name.clone()).collect();

        let to_add: Vec<&DesiredPipelineSpec> = desired
            .iter()
            .filter(|s| !tracked_names.contains(&s.name))
            .collect();
        let to_remove: Vec<TrackedPipeline> = self
            .tracked
            .iter()
            .filter(|t| !desired_names.contains(t.name.as_str()))
            .cloned()
            .collect();

        if !to_add.is_empty() || !to_remove.is_empty() {
            info!(
                "Reconciling: {} pipeline(s) to provision, {} to tear down",
                to_add.len(),
                to_remove.len()
            );
        }

        for spec in to_add {
            if let Some(entry) = self.provision(spec).await {
                self.tracked.push(entry);
            }
        }

        for entry in &to_remove {
            self.deprovision(entry).await;
        }
        if !to_remove.is_empty() {
            let removed: HashSet<&str> = to_remove.iter().map(|t| t.name.as_str()).collect();
            // Removed unconditionally, whatever the teardown outcomes were.
            self.tracked.retain(|t| !removed.contains(t.name.as_str()));
        }

        Ok(())
    }

    /// Provisions one declared pipeline
    ///
    /// Returns a tracked entry only when the full sequence succeeded. A
    /// failed sequence leaves no entry and is retried from scratch on the
    /// next pass; whatever was already created stays behind on the remote
    /// side unless rollback mode is enabled.
    async fn provision(&self, spec: &DesiredPipelineSpec) -> Option<TrackedPipeline> {
        let request = CreatePipelineRequest::new(&spec.name, &spec.description);
        let pipeline = match self.control_plane.create_pipeline(request).await {
            Ok(pipeline) => {
                info!("Created pipeline {} ({})", spec.name, pipeline.id);
                self.audit
                    .record(&format!("Pipeline: {} - Created", pipeline.id));
                pipeline
            }
            Err(e) => {
                error!("Failed to create pipeline {}: {}", spec.name, e);
                self.audit.record("Failed to create pipeline");
                return None;
            }
        };

        let source = self
            .create_connector(CreateConnectorRequest::source(
                &pipeline.id,
                &spec.source,
                &self.config.credentials,
            ))
            .await;
        let destination = self
            .create_connector(CreateConnectorRequest::destination(
                &pipeline.id,
                &spec.destination,
                &self.config.credentials,
            ))
            .await;

        let (source, destination) = match (source, destination) {
            (Some(source), Some(destination)) => (source, destination),
            (source, destination) => {
                error!(
                    "Abandoning provisioning of pipeline {}: connector creation failed",
                    spec.name
                );
                if self.config.rollback_on_partial_failure {
                    self.roll_back(&pipeline.id, &[source, destination]).await;
                }
                return None;
            }
        };

        match self.control_plane.start_pipeline(&pipeline.id).await {
            Ok(()) => {
                info!("Started pipeline {}", pipeline.id);
                self.audit
                    .record(&format!("Pipeline: {} - Started", pipeline.id));
                Some(TrackedPipeline {
                    pipeline_id: pipeline.id,
                    name: spec.name.clone(),
                    source_connector_id: source.id,
                    destination_connector_id: destination.id,
                })
            }
            Err(e) => {
                error!("Failed to start pipeline {}: {}", pipeline.id, e);
                self.audit
                    .record(&format!("Failed to start pipeline: {}", pipeline.id));
                if self.config.rollback_on_partial_failure {
                    self.roll_back(&pipeline.id, &[Some(source), Some(destination)])
                        .await;
                }
                None
            }
        }
    }

    /// Tears down one tracked pipeline
    ///
    /// All four calls are attempted unconditionally; a failed step is
    /// reported and the rest still run.
    async fn deprovision(&self, entry: &TrackedPipeline) {
        info!("Tearing down pipeline {} ({})", entry.name, entry.pipeline_id);

        match self.control_plane.stop_pipeline(&entry.pipeline_id).await {
            Ok(()) => {
                info!("Stopped pipeline {}", entry.pipeline_id);
                self.audit
                    .record(&format!("Pipeline: {} - Stopped", entry.pipeline_id));
            }
            Err(e) => {
                error!("Failed to stop pipeline {}: {}", entry.pipeline_id, e);
                self.audit
                    .record(&format!("Failed to stop pipeline: {}", entry.pipeline_id));
            }
        }

        self.delete_connector(&entry.source_connector_id).await;
        self.delete_connector(&entry.destination_connector_id).await;
        self.delete_pipeline(&entry.pipeline_id).await;
    }

    /// Deletes the resources a failed provision sequence left behind
    async fn roll_back(&self, pipeline_id: &str, connectors: &[Option<Connector>]) {
        info!("Rolling back partially provisioned pipeline {}", pipeline_id);

        for connector in connectors.iter().flatten() {
            self.delete_connector(&connector.id).await;
        }
        self.delete_pipeline(pipeline_id).await;
    }

    async fn create_connector(&self, request: CreateConnectorRequest) -> Option<Connector> {
        let name = request.config.name.clone();
        match self.control_plane.create_connector(request).await {
            Ok(connector) => {
                info!("Created connector {} ({})", name, connector.id);
                self.audit
                    .record(&format!("Connector: {} - Created", connector.id));
                Some(connector)
            }
            Err(e) => {
                error!("Failed to create connector {}: {}", name, e);
                self.audit.record("Failed to create connector");
                None
            }
        }
    }

    async fn delete_connector(&self, connector_id: &str) {
        match self.control_plane.delete_connector(connector_id).await {
            Ok(()) => {
                info!("Deleted connector {}", connector_id);
                self.audit
                    .record(&format!("Connector: {} - Deleted", connector_id));
            }
            Err(e) => {
                error!("Failed to delete connector {}: {}", connector_id, e);
                self.audit
                    .record(&format!("Failed to delete connector: {}", connector_id));
            }
        }
    }

    async fn delete_pipeline(&self, pipeline_id: &str) {
        match self.control_plane.delete_pipeline(pipeline_id).await {
            Ok(()) => {
                info!("Deleted pipeline {}", pipeline_id);
                self.audit
                    .record(&format!("Pipeline: {} - Deleted", pipeline_id));
            }
            Err(e) => {
                error!("Failed to delete pipeline {}: {}", pipeline_id, e);
                self.audit
                    .record(&format!("Failed to delete pipeline: {}", pipeline_id));
            }
        }
    }
}
