//! Progress events emitted during a bulk migration.
//!
//! Callers that want live feedback (a CLI progress line, a test recorder) pass a
//! [`ProgressReporter`]; everyone else uses [`SilentReporter`].

use crate::core::{bulk::BulkMigrationResult, migration::MigrationResult};

/// Something that happened during a bulk migration
#[derive(Debug)]
pub enum MigrationEvent<'a> {
    /// The id set has been selected and partitioned
    RunStarted {
        /// Number of materials selected
        total: usize,
        /// Number of batches they were split into
        batch_count: usize,
    },
    /// A batch is about to be processed
    BatchStarted {
        /// Zero-based batch index
        batch_index: usize,
        /// Number of materials in this batch
        size: usize,
    },
    /// One material has been attempted
    ItemMigrated {
        /// Outcome for that material
        result: &'a MigrationResult,
    },
    /// A batch finished (fully or up to a cancellation)
    BatchCompleted {
        /// Zero-based batch index
        batch_index: usize,
        /// Successful items in this batch
        successful: usize,
        /// Failed items in this batch
        failed: usize,
    },
    /// Processing stopped early because a batch had failures
    StoppedOnError {
        /// Batch that contained the failures
        batch_index: usize,
    },
    /// Processing stopped because the run was cancelled
    Cancelled {
        /// Items attempted before the cancellation
        attempted: usize,
    },
    /// The run is over
    RunCompleted {
        /// Final aggregate
        summary: &'a BulkMigrationResult,
    },
}

/// Receives [`MigrationEvent`]s as a bulk migration progresses
pub trait ProgressReporter: Send + Sync {
    /// Handles one event. Must not block.
    fn report(&self, event: MigrationEvent<'_>);
}

/// Reporter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _event: MigrationEvent<'_>) {}
}
