//! Bulk material migration.
//!
//! Splits the selected material ids into fixed-size batches and migrates them
//! one at a time through [`migrate_material`]. Batches and items run
//! sequentially. Each material commits on its own, so stopping early (on
//! cancellation or on a failing batch) keeps everything already migrated.

use crate::{
    core::{
        material::get_all_material_ids,
        migration::{MigrateMaterialCommand, MigrationResult, migrate_material},
        progress::{MigrationEvent, ProgressReporter, SilentReporter},
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Request to migrate many materials.
///
/// Built from [`MigrationConfig`](crate::config::migration::MigrationConfig),
/// which owns the defaults for a run.
#[derive(Debug, Clone)]
pub struct BulkMigrateCommand {
    /// Materials to migrate; every material when `None`
    pub material_ids: Option<Vec<Uuid>>,
    /// User the migration is performed on behalf of
    pub user_id: String,
    /// Number of materials per batch, must be greater than zero
    pub batch_size: usize,
    /// Keep going after a batch containing failures
    pub continue_on_error: bool,
    /// Skip required-field validation
    pub skip_validation: bool,
    /// Migrate invalid materials anyway and overwrite existing variants
    pub force_migration: bool,
}

impl BulkMigrateCommand {
    fn item_command(&self, material_id: Uuid) -> MigrateMaterialCommand {
        MigrateMaterialCommand {
            material_id,
            user_id: self.user_id.clone(),
            skip_validation: self.skip_validation,
            force_migration: self.force_migration,
        }
    }
}

/// Aggregate outcome of a bulk migration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkMigrationResult {
    /// Number of materials selected for migration, attempted or not
    pub total_processed: usize,
    /// Attempted materials that migrated
    pub successful_migrations: usize,
    /// Attempted materials that failed
    pub failed_migrations: usize,
    /// One result per attempted material, in attempt order
    pub results: Vec<MigrationResult>,
    /// Whether the run was cut short by cancellation
    pub cancelled: bool,
}

impl BulkMigrationResult {
    /// Number of materials actually attempted
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.successful_migrations + self.failed_migrations
    }

    /// Results of the materials that failed
    pub fn failures(&self) -> impl Iterator<Item = &MigrationResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// Migrates materials in batches without progress reporting.
///
/// # Errors
/// Returns [`Error::InvalidBatchSize`] for a zero batch size, or a database
/// error if the material ids cannot be listed. Per-material failures are
/// reported in the result, never as an error.
pub async fn migrate_materials(
    db: &DatabaseConnection,
    command: &BulkMigrateCommand,
    cancel_token: &CancellationToken,
) -> Result<BulkMigrationResult> {
    migrate_materials_with_progress(db, command, &SilentReporter, cancel_token).await
}

/// Migrates materials in batches, emitting [`MigrationEvent`]s to `reporter`.
///
/// Cancellation is checked before every batch and before every material; an
/// in-flight material always runs to completion. With `continue_on_error`
/// unset, the run stops after the first batch that contains a failure.
///
/// # Errors
/// Same as [`migrate_materials`].
#[instrument(skip_all, fields(user_id = %command.user_id, batch_size = command.batch_size))]
pub async fn migrate_materials_with_progress<R: ProgressReporter>(
    db: &DatabaseConnection,
    command: &BulkMigrateCommand,
    reporter: &R,
    cancel_token: &CancellationToken,
) -> Result<BulkMigrationResult> {
    if command.batch_size == 0 {
        return Err(Error::InvalidBatchSize {
            batch_size: command.batch_size,
        });
    }

    let material_ids = match &command.material_ids {
        Some(ids) => ids.clone(),
        None => get_all_material_ids(db).await?,
    };

    let batch_count = material_ids.len().div_ceil(command.batch_size);
    info!(
        "Migrating {} materials in {} batches of up to {}",
        material_ids.len(),
        batch_count,
        command.batch_size
    );
    reporter.report(MigrationEvent::RunStarted {
        total: material_ids.len(),
        batch_count,
    });

    let mut summary = BulkMigrationResult {
        total_processed: material_ids.len(),
        ..Default::default()
    };

    for (batch_index, batch) in material_ids.chunks(command.batch_size).enumerate() {
        if cancel_token.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        reporter.report(MigrationEvent::BatchStarted {
            batch_index,
            size: batch.len(),
        });

        let mut batch_results = Vec::with_capacity(batch.len());
        for &material_id in batch {
            if cancel_token.is_cancelled() {
                summary.cancelled = true;
                break;
            }

            let result = migrate_material(db, &command.item_command(material_id)).await;
            reporter.report(MigrationEvent::ItemMigrated { result: &result });
            batch_results.push(result);
        }

        let failed = batch_results.iter().filter(|r| !r.success).count();
        let successful = batch_results.len() - failed;
        summary.successful_migrations += successful;
        summary.failed_migrations += failed;
        summary.results.extend(batch_results);

        info!(
            "Batch {}/{} done: {} migrated, {} failed",
            batch_index + 1,
            batch_count,
            successful,
            failed
        );
        reporter.report(MigrationEvent::BatchCompleted {
            batch_index,
            successful,
            failed,
        });

        if summary.cancelled {
            break;
        }

        if failed > 0 && !command.continue_on_error {
            warn!(
                "Stopping after batch {} because it contained {} failures",
                batch_index + 1,
                failed
            );
            reporter.report(MigrationEvent::StoppedOnError { batch_index });
            break;
        }
    }

    if summary.cancelled {
        warn!(
            "Migration cancelled after {} of {} materials",
            summary.attempted(),
            summary.total_processed
        );
        reporter.report(MigrationEvent::Cancelled {
            attempted: summary.attempted(),
        });
    }

    info!(
        "Bulk migration finished: {} selected, {} migrated, {} failed",
        summary.total_processed, summary.successful_migrations, summary.failed_migrations
    );
    reporter.report(MigrationEvent::RunCompleted { summary: &summary });

    Ok(summary)
}
