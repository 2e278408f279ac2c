//! Pipeline domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline resource as reported by the control plane
///
/// Only the fields the reconciler relies on are modeled; unknown fields in
/// the response body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A pipeline this reconciler believes it has fully provisioned
///
/// An entry exists only when the whole provision sequence (pipeline, both
/// connectors, start) succeeded in a past pass. The control plane remains
/// authoritative; this is a local record of our own writes and is never
/// refreshed from the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedPipeline {
    /// Remote pipeline identifier
    pub pipeline_id: String,
    /// Pipeline name, matched against the desired state
    pub name: String,
    /// Remote identifier of the source connector
    pub source_connector_id: String,
    /// Remote identifier of the destination connector
    pub destination_connector_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_deserializes_with_unknown_fields() {
        let pipeline: Pipeline = serde_json::from_value(serde_json::json!({
            "id": "pl-1",
            "state": { "status": "STATUS_RUNNING" }
        }))
        .unwrap();

        assert_eq!(pipeline.id, "pl-1");
        assert!(pipeline.created_at.is_none());
    }
}
