//! Desired-state reader
//!
//! Loads the operator-declared pipeline table from a CSV file. A missing
//! file is not an error: it reads as an empty desired state, which marks
//! every tracked pipeline for removal on the next pass.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use sluice_core::domain::spec::{
    DesiredPipelineSpec, DestinationConnectorSpec, SourceConnectorSpec,
};

/// Reads the desired pipeline set from a CSV file
#[derive(Debug, Clone)]
pub struct DesiredStateReader {
    path: PathBuf,
}

/// Raw CSV row; lowered into the typed spec after parsing
#[derive(Debug, Deserialize)]
struct PipelineRow {
    pipeline_name: String,
    pipeline_description: String,
    connector_name_source: String,
    #[serde(rename = "aws.bucket_source")]
    bucket_source: String,
    prefix_source: String,
    connector_name_destination: String,
    #[serde(rename = "aws.bucket_destination")]
    bucket_destination: String,
    prefix_destination: String,
    format_destination: String,
}

impl From<PipelineRow> for DesiredPipelineSpec {
    fn from(row: PipelineRow) -> Self {
        Self {
            name: row.pipeline_name,
            description: row.pipeline_description,
            source: SourceConnectorSpec {
                name: row.connector_name_source,
                bucket: row.bucket_source,
                prefix: row.prefix_source,
            },
            destination: DestinationConnectorSpec {
                name: row.connector_name_destination,
                bucket: row.bucket_destination,
                prefix: row.prefix_destination,
                format: row.format_destination,
            },
        }
    }
}

impl DesiredStateReader {
    /// Creates a reader for the given CSV file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all declared pipelines, in file order
    ///
    /// A missing file yields an empty desired state with a warning. Any
    /// other I/O or parse error is propagated to the cycle driver.
    pub fn read(&self) -> Result<Vec<DesiredPipelineSpec>> {
        if !self.path.exists() {
            warn!(
                "Desired-state file {} not found, treating desired state as empty",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let mut specs = Vec::new();
        for row in reader.deserialize() {
            let row: PipelineRow = row.with_context(|| {
                format!("Failed to parse desired-state row in {}", self.path.display())
            })?;
            specs.push(row.into());
        }

        Ok(specs)
    }
}
