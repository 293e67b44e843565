use dotenvy::dotenv;
use material_migrator::{
    config::{database, migration},
    core::{bulk, report},
    errors::{Error, Result},
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the migration configuration
    let config = migration::load_default_config()
        .inspect_err(|e| error!("Failed to load migration configuration: {}", e))?
        .migration;
    info!("Loaded migration configuration for user '{}'", config.user_id);

    // 4. Connect and make sure the target tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Ctrl-C stops the run at the next material boundary
    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing the current material and stopping");
            signal_token.cancel();
        }
    });

    // 6. Run the migration
    let result = bulk::migrate_materials(&db, &config.to_command(), &cancel_token).await?;
    info!("{}", report::format_migration_summary(&result));

    if let Some(report_path) = &config.report_path {
        let json = serde_json::to_string_pretty(&result)?;
        tokio::fs::write(report_path, json).await?;
        info!("Wrote migration report to {}", report_path.display());
    }

    if result.failed_migrations > 0 {
        return Err(Error::IncompleteMigration {
            failed: result.failed_migrations,
            attempted: result.attempted(),
        });
    }

    Ok(())
}
