//! Audit trail
//!
//! Append-only, human-readable record of every pipeline and connector
//! lifecycle transition, one line per transition, in the order they occur.
//! The reconciler only ever writes to it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

/// Append-only audit trail backed by a plain text file
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Creates an audit log writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one line to the trail
    ///
    /// A write failure must never interrupt reconciliation; it is logged
    /// and the entry is dropped.
    pub fn record(&self, message: &str) {
        if let Err(e) = self.append(message) {
            warn!("Failed to write audit entry {:?}: {}", message, e);
        }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.txt");
        let audit = AuditLog::new(&path);

        audit.record("Pipeline: pl-1 - Created");
        audit.record("Connector: cn-1 - Created");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Pipeline: pl-1 - Created\nConnector: cn-1 - Created\n"
        );
    }

    #[test]
    fn appends_to_existing_trail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.txt");
        std::fs::write(&path, "Pipeline: pl-0 - Deleted\n").unwrap();

        AuditLog::new(&path).record("Pipeline: pl-1 - Created");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Pipeline: pl-0 - Deleted\nPipeline: pl-1 - Created\n"
        );
    }
}
