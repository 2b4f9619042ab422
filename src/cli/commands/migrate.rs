use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::MigrationConfig;
use crate::database::run_migrations;

pub async fn handle(dev: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = if dev {
        MigrationConfig::development()
    } else {
        MigrationConfig::primary()
    };

    let applied = run_migrations(&config).await?;
    let message = match applied.len() {
        0 => format!("{} is up to date", config.url_source),
        n => format!("Applied {} migration(s) to {}", n, config.url_source),
    };

    output_success(
        output_format,
        &message,
        Some(json!({ "applied": applied, "config": config })),
    )
}
