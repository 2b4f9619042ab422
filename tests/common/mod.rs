use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use playfield_api::auth::{issue_token_with_secret, Role, SessionPayload};
use playfield_api::config::MigrationConfig;
use playfield_api::database::run_migrations;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Used when the environment has no database; the server still starts and
/// reports itself degraded.
const FALLBACK_DATABASE_URL: &str = "postgres://playfield@127.0.0.1:5432/playfield_test";

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Assumes the debug profile has been built
        let mut cmd = Command::new("target/debug/playfield-api");
        cmd.env("PLAYFIELD_API_PORT", port.to_string())
            .env("JWT_SECRET", TEST_JWT_SECRET)
            .env("NODE_ENV", "test")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if std::env::var("DATABASE_URL").map(|v| v.is_empty()).unwrap_or(true) {
            cmd.env("DATABASE_URL", FALLBACK_DATABASE_URL);
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;
        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() <= deadline {
            if let Ok(resp) = client.get(format!("{}/health", self.base_url)).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Session token the spawned server will accept
#[allow(dead_code)]
pub fn token_for(sub: &str, role: Role) -> String {
    let payload = SessionPayload {
        sub: sub.to_string(),
        email: Some(format!("{}@example.test", sub)),
        role,
    };
    issue_token_with_secret(payload, Some(TEST_JWT_SECRET)).expect("failed to sign test token")
}

/// Database-backed tests run only when DATABASE_URL points at a real server
#[allow(dead_code)]
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty())
}

/// Migrated pool for seeding, or `None` when no database is configured
#[allow(dead_code)]
pub async fn migrated_pool() -> Result<Option<PgPool>> {
    let Some(url) = database_url() else {
        return Ok(None);
    };

    run_migrations(&MigrationConfig::primary()).await?;
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await?;
    Ok(Some(pool))
}

#[allow(dead_code)]
pub async fn seed_profile(pool: &PgPool, role: Role) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO profiles (id, email, role) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(format!("{}@example.test", id))
        .bind(role)
        .execute(pool)
        .await?;
    Ok(id)
}

#[allow(dead_code)]
pub async fn seed_sport(pool: &PgPool) -> Result<Uuid> {
    let id = sqlx::query_scalar(
        "INSERT INTO sports (name, sport_type, time_bound) VALUES ($1, 'team', true) RETURNING id",
    )
    .bind(format!("Futsal {}", Uuid::new_v4()))
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Venue with a single facility, created through the admin API.
/// Returns `(venue_id, facility_id)`.
#[allow(dead_code)]
pub async fn create_facility(
    server: &TestServer,
    admin: &str,
    sport_id: Uuid,
    price_per_hour: u32,
) -> Result<(String, String)> {
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/api/admin/venues"))
        .bearer_auth(admin)
        .json(&json!({
            "name": "Arena Utara",
            "address": "Jl. Merdeka 1",
            "city": "Bandung",
            "sportIds": [sport_id]
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "venue creation returned {}", res.status());
    let venue: Value = res.json().await?;
    let venue_id = venue["data"]["id"].as_str().context("venue id")?.to_string();

    let res = client
        .post(server.url(&format!("/api/admin/venues/{}/facilities", venue_id)))
        .bearer_auth(admin)
        .json(&json!({ "sportId": sport_id, "name": "Court 1", "pricePerHour": price_per_hour }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "facility creation returned {}", res.status());
    let facility: Value = res.json().await?;
    let facility_id = facility["data"]["id"].as_str().context("facility id")?.to_string();

    Ok((venue_id, facility_id))
}
