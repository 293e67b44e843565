//! Human-readable summaries of migration runs.

use crate::core::bulk::BulkMigrationResult;
use std::fmt::Write;

/// Formats a bulk migration result into a summary suitable for logs or a terminal.
///
/// The first line carries the counts; failed materials follow, one per line.
#[must_use]
pub fn format_migration_summary(result: &BulkMigrationResult) -> String {
    let mut summary = format!(
        "Material migration - {} selected, {} attempted, {} migrated, {} failed\n",
        result.total_processed,
        result.attempted(),
        result.successful_migrations,
        result.failed_migrations
    );

    if result.cancelled {
        summary.push_str("  Run was cancelled before all materials were attempted\n");
    }

    for failure in result.failures() {
        // write! to a String cannot fail
        let _ = writeln!(
            summary,
            "  {}: {}",
            failure.material_id,
            failure.error_message.as_deref().unwrap_or("unknown error")
        );
    }

    summary
}
