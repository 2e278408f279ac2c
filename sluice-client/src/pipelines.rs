//! Pipeline lifecycle endpoints

use crate::ControlPlaneClient;
use crate::error::Result;
use sluice_core::domain::pipeline::Pipeline;
use sluice_core::dto::pipeline::CreatePipelineRequest;

impl ControlPlaneClient {
    // =============================================================================
    // Pipeline Lifecycle
    // =============================================================================

    /// Create a new pipeline
    ///
    /// # Arguments
    /// * `req` - The pipeline creation request
    ///
    /// # Returns
    /// The created pipeline, including its remote identifier
    pub async fn create_pipeline(&self, req: CreatePipelineRequest) -> Result<Pipeline> {
        let url = format!("{}/v1/pipelines", self.base_url);
        let response = self.client.post(&url).json(&req).send().await?;

        self.handle_response(response).await
    }

    /// List all pipelines known to the control plane
    ///
    /// The reconciler itself never calls this; its tracked state is built
    /// from its own writes only.
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let url = format!("{}/v1/pipelines", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Start a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The remote pipeline identifier
    pub async fn start_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = format!("{}/v1/pipelines/{}/start", self.base_url, pipeline_id);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Stop a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The remote pipeline identifier
    pub async fn stop_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = format!("{}/v1/pipelines/{}/stop", self.base_url, pipeline_id);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Delete a pipeline
    ///
    /// # Arguments
    /// * `pipeline_id` - The remote pipeline identifier to delete
    pub async fn delete_pipeline(&self, pipeline_id: &str) -> Result<()> {
        let url = format!("{}/v1/pipelines/{}", self.base_url, pipeline_id);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
