//! Connector DTOs for the control-plane API
//!
//! The control plane takes connector settings as a flat string map. The
//! typed specs from `domain::spec` are lowered here, with the process-wide
//! credentials injected into every map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::connector::ConnectorKind;
use crate::domain::spec::{DestinationConnectorSpec, SourceConnectorSpec};

/// Object-storage plugin identifier understood by the control plane
pub const S3_PLUGIN: &str = "builtin:s3";

/// Credentials injected verbatim into every connector settings map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

/// Request body for `POST /v1/connectors`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConnectorRequest {
    #[serde(rename = "type")]
    pub kind: ConnectorKind,
    pub plugin: String,
    #[serde(rename = "pipelineId")]
    pub pipeline_id: String,
    pub config: ConnectorConfig,
}

/// Connector configuration block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub name: String,
    pub settings: HashMap<String, String>,
}

impl CreateConnectorRequest {
    /// Builds the source-connector request for a pipeline
    pub fn source(
        pipeline_id: impl Into<String>,
        spec: &SourceConnectorSpec,
        credentials: &AwsCredentials,
    ) -> Self {
        let mut settings = base_settings(credentials);
        settings.insert("aws.bucket".to_string(), spec.bucket.clone());
        settings.insert("prefix".to_string(), spec.prefix.clone());

        Self {
            kind: ConnectorKind::Source,
            plugin: S3_PLUGIN.to_string(),
            pipeline_id: pipeline_id.into(),
            config: ConnectorConfig {
                name: spec.name.clone(),
                settings,
            },
        }
    }

    /// Builds the destination-connector request for a pipeline
    pub fn destination(
        pipeline_id: impl Into<String>,
        spec: &DestinationConnectorSpec,
        credentials: &AwsCredentials,
    ) -> Self {
        let mut settings = base_settings(credentials);
        settings.insert("aws.bucket".to_string(), spec.bucket.clone());
        settings.insert("prefix".to_string(), spec.prefix.clone());
        settings.insert("format".to_string(), spec.format.clone());

        Self {
            kind: ConnectorKind::Destination,
            plugin: S3_PLUGIN.to_string(),
            pipeline_id: pipeline_id.into(),
            config: ConnectorConfig {
                name: spec.name.clone(),
                settings,
            },
        }
    }
}

fn base_settings(credentials: &AwsCredentials) -> HashMap<String, String> {
    let mut settings = HashMap::new();
    settings.insert(
        "aws.accessKeyId".to_string(),
        credentials.access_key_id.clone(),
    );
    settings.insert(
        "aws.secretAccessKey".to_string(),
        credentials.secret_access_key.clone(),
    );
    settings.insert("aws.region".to_string(), credentials.region.clone());
    settings
}
