//! Pipeline DTOs for the control-plane API

use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/pipelines`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePipelineRequest {
    pub config: PipelineConfig,
}

/// Pipeline configuration block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
}

impl CreatePipelineRequest {
    /// Builds the creation request for a declared pipeline
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            config: PipelineConfig {
                name: name.into(),
                description: description.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_pipeline_request_wire_shape() {
        let req = CreatePipelineRequest::new("ingest", "raw object ingest");

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "config": {
                    "name": "ingest",
                    "description": "raw object ingest"
                }
            })
        );
    }
}
