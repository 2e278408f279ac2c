//! Control-plane capability
//!
//! The reconciler drives the remote service through this trait so tests
//! can substitute a recording fake for the HTTP client. The production
//! implementation delegates to `sluice_client::ControlPlaneClient`.

use async_trait::async_trait;

use sluice_client::{ControlPlaneClient, Result};
use sluice_core::domain::connector::Connector;
use sluice_core::domain::pipeline::Pipeline;
use sluice_core::dto::connector::CreateConnectorRequest;
use sluice_core::dto::pipeline::CreatePipelineRequest;

/// Lifecycle operations the reconciler needs from the control plane
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Creates a pipeline and returns its remote representation
    async fn create_pipeline(&self, req: CreatePipelineRequest) -> Result<Pipeline>;

    /// Creates a connector attached to a pipeline
    async fn create_connector(&self, req: CreateConnectorRequest) -> Result<Connector>;

    /// Starts a pipeline
    async fn start_pipeline(&self, pipeline_id: &str) -> Result<()>;

    /// Stops a pipeline
    async fn stop_pipeline(&self, pipeline_id: &str) -> Result<()>;

    /// Deletes a connector
    async fn delete_connector(&self, connector_id: &str) -> Result<()>;

    /// Deletes a pipeline
    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()>;
}

#[async_trait]
impl ControlPlane for ControlPlaneClient {
    async fn create_pipeline(&self, req: CreatePipelineRequest) -> Result<Pipeline> {
        ControlPlaneClient::create_pipeline(self, req).await
    }

    async fn create_connector(&self, req: CreateConnectorRequest) -> Result<Connector> {
        ControlPlaneClient::create_connector(self, req).await
    }

    async fn start_pipeline(&self, pipeline_id: &str) -> Result<()> {
        ControlPlaneClient::start_pipeline(self, pipeline_id).await
    }

    async fn stop_pipeline(&self, pipeline_id: &str) -> Result<()> {
        ControlPlaneClient::stop_pipeline(self, pipeline_id).await
    }

    async fn delete_connector(&self, connector_id: &str) -> Result<()> {
        ControlPlaneClient::delete_connector(self, connector_id).await
    }

    async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()> {
        ControlPlaneClient::delete_pipeline(self, pipeline_id).await
    }
}
