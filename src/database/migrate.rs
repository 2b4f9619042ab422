use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::MigrationConfig;
use crate::database::DatabaseError;

/// Apply pending migrations from `config.schema_dir`; returns the versions applied
pub async fn run_migrations(config: &MigrationConfig) -> Result<Vec<i64>, DatabaseError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or(DatabaseError::ConfigMissing(config.url_source))?;

    let mut migrator = Migrator::new(config.schema_dir.as_path()).await?;
    // Strict mode refuses databases that ran migrations we no longer have
    migrator.set_ignore_missing(!config.strict);

    let pool = PgPoolOptions::new().max_connections(1).connect(url).await?;

    let applied_before: Vec<i64> = sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
        .fetch_all(&pool)
        .await
        .unwrap_or_default();

    migrator.run(&pool).await?;

    let applied: Vec<i64> = migrator
        .iter()
        .map(|m| m.version)
        .filter(|v| !applied_before.contains(v))
        .collect();

    if config.verbose {
        for migration in migrator.iter().filter(|m| applied.contains(&m.version)) {
            info!("Applied migration {} ({})", migration.version, migration.description);
        }
    }
    info!(
        "Migrations complete against {} ({} {}, {} newly applied)",
        config.url_source,
        config.dialect,
        config.schema_dir.display(),
        applied.len()
    );

    pool.close().await;
    Ok(applied)
}
