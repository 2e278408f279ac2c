//! Desired-state domain types
//!
//! One `DesiredPipelineSpec` corresponds to one row of the operator-declared
//! pipeline table. Connector settings are typed per side; they are lowered
//! to the control plane's string map only at the serialization boundary
//! (see `dto::connector`).

use serde::{Deserialize, Serialize};

/// Declared configuration for one pipeline
///
/// Immutable per read; the reconciler replaces the whole desired set on
/// every pass. The pipeline name is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredPipelineSpec {
    /// Unique pipeline name
    pub name: String,
    pub description: String,
    pub source: SourceConnectorSpec,
    pub destination: DestinationConnectorSpec,
}

/// Typed settings for the source side of a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConnectorSpec {
    /// Connector name
    pub name: String,
    /// Object-storage bucket to read from
    pub bucket: String,
    /// Key prefix within the bucket
    pub prefix: String,
}

/// Typed settings for the destination side of a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationConnectorSpec {
    /// Connector name
    pub name: String,
    /// Object-storage bucket to write to
    pub bucket: String,
    /// Key prefix within the bucket
    pub prefix: String,
    /// Output record format
    pub format: String,
}
