pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "playfield")]
#[command(about = "Playfield CLI - operate the sports-facility booking API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve,

    #[command(about = "Apply pending schema migrations")]
    Migrate {
        #[arg(long, help = "Target DEV_DATABASE_URL instead of DATABASE_URL")]
        dev: bool,
    },

    #[command(about = "Issue a session token signed with JWT_SECRET")]
    Token(commands::token::TokenArgs),

    #[command(about = "List venues from a running server")]
    Venues {
        #[command(flatten)]
        remote: commands::remote::RemoteArgs,
    },

    #[command(about = "Payment verification queue")]
    Payments {
        #[command(subcommand)]
        cmd: commands::remote::PaymentCommands,
    },

    #[command(about = "Admin reports")]
    Reports {
        #[command(subcommand)]
        cmd: commands::remote::ReportCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Serve => commands::serve::handle().await,
        Commands::Migrate { dev } => commands::migrate::handle(dev, output_format).await,
        Commands::Token(args) => commands::token::handle(args, output_format),
        Commands::Venues { remote } => commands::remote::venues(remote, output_format).await,
        Commands::Payments { cmd } => commands::remote::handle_payments(cmd, output_format).await,
        Commands::Reports { cmd } => commands::remote::handle_reports(cmd, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_filters() {
        let cli = Cli::try_parse_from([
            "playfield",
            "--json",
            "reports",
            "bookings",
            "--from",
            "2024-05-01T00:00:00Z",
            "--token",
            "abc",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Reports { .. }));
    }

    #[test]
    fn token_requires_subject() {
        assert!(Cli::try_parse_from(["playfield", "token"]).is_err());
        assert!(Cli::try_parse_from(["playfield", "token", "--sub", "u1", "--role", "admin"]).is_ok());
    }
}
