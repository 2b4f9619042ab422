use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::utils::{output_collection, output_value};
use crate::cli::OutputFormat;
use crate::client::{ApiClient, Credentials};
use crate::dto::BookingStatsQuery;

/// Where the server is and how to authenticate against it
#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    #[arg(long, default_value = "http://localhost:4000", help = "Server base URL")]
    pub url: String,
    #[arg(long, conflicts_with = "cookie", help = "Bearer token")]
    pub token: Option<String>,
    #[arg(long, help = "Raw Cookie header to forward, e.g. access_token=...")]
    pub cookie: Option<String>,
}

impl RemoteArgs {
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        let credentials = match (&self.token, &self.cookie) {
            (Some(token), _) => Credentials::Bearer(token.clone()),
            (None, Some(cookie)) => Credentials::Cookie(cookie.clone()),
            (None, None) => Credentials::None,
        };
        ApiClient::new(&self.url, credentials)
    }
}

#[derive(Subcommand)]
pub enum PaymentCommands {
    #[command(about = "Payments awaiting verification")]
    Pending {
        #[command(flatten)]
        remote: RemoteArgs,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    #[command(about = "Booking revenue and counts")]
    Bookings {
        #[arg(long)]
        venue_id: Option<Uuid>,
        #[arg(long, help = "RFC 3339 start (inclusive)")]
        from: Option<DateTime<Utc>>,
        #[arg(long, help = "RFC 3339 end (exclusive)")]
        to: Option<DateTime<Utc>>,
        #[command(flatten)]
        remote: RemoteArgs,
    },
}

pub async fn venues(remote: RemoteArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let venues = remote.client()?.venues().await?;

    output_collection(output_format, &venues, "No venues", |v| {
        let sports: Vec<&str> = v.sports.iter().map(|s| s.name.as_str()).collect();
        format!(
            "{}  {} ({}){}  [{}]",
            v.venue.id,
            v.venue.name,
            v.venue.city,
            if v.is_gym { " gym" } else { "" },
            sports.join(", ")
        )
    })
}

pub async fn handle_payments(cmd: PaymentCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PaymentCommands::Pending { remote } => {
            let pending = remote.client()?.pending_payments().await?;

            output_collection(output_format, &pending, "No payments awaiting verification", |p| {
                format!(
                    "{}  {} {}  {} / {}  {}",
                    p.payment.id, p.payment.amount, p.payment.method, p.venue_name, p.facility_name, p.payer_email
                )
            })
        }
    }
}

pub async fn handle_reports(cmd: ReportCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ReportCommands::Bookings {
            venue_id,
            from,
            to,
            remote,
        } => {
            let query = BookingStatsQuery { venue_id, from, to };
            let stats = remote.client()?.booking_stats(&query).await?;
            output_value(output_format, &stats)
        }
    }
}
