//! Core migration logic - framework-agnostic functions over a `SeaORM` connection.

/// Bulk migration orchestration
pub mod bulk;
/// Category lookups
pub mod category;
/// Legacy material access
pub mod material;
/// Single material migration
pub mod migration;
/// Photo and property payload decoding
pub mod payload;
/// Base product and product variant upserts
pub mod product;
/// Progress events for bulk runs
pub mod progress;
/// Run summaries
pub mod report;
/// Unit of measure normalization and resolution
pub mod unit;
