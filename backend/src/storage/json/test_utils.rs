/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use anyhow::Result;
use shared::{Bill, Participant, SplitMode};
use super::bill_repository::BillRepository;
use super::connection::FileConnection;

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The file connection for the test
    pub connection: FileConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = FileConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Fresh repository over this environment's connection
    pub fn bill_repository(&self) -> BillRepository<FileConnection> {
        BillRepository::new(self.connection.clone())
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("BILL_SPLITTER_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// A small equal-split bill for storage tests
pub fn sample_bill(id: &str, name: &str) -> Bill {
    Bill {
        id: id.to_string(),
        name: name.to_string(),
        total_amount: 90.0,
        designated_payer: Some("Alice".to_string()),
        split_mode: SplitMode::Equal,
        participants: vec![
            Participant::new("Alice"),
            Participant::new("Bob"),
            Participant::new("Carol"),
        ],
        created_at: "2025-01-20T10:00:00Z".to_string(),
    }
}
