//! Connector domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connector resource as reported by the control plane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub id: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Which side of a pipeline a connector attaches to
///
/// Serialized with the control plane's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorKind {
    #[serde(rename = "TYPE_SOURCE")]
    Source,
    #[serde(rename = "TYPE_DESTINATION")]
    Destination,
}
