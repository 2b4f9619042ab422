mod common;

use anyhow::{Context, Result};
use chrono::{Duration, DurationRound, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use playfield_api::auth::Role;

struct Player {
    id: Uuid,
    token: String,
}

impl Player {
    async fn seed(pool: &sqlx::PgPool) -> Result<Self> {
        let id = common::seed_profile(pool, Role::User).await?;
        Ok(Self {
            id,
            token: common::token_for(&id.to_string(), Role::User),
        })
    }
}

async fn post(client: &reqwest::Client, url: String, token: &str, body: Value) -> Result<(StatusCode, Value)> {
    let res = client.post(url).bearer_auth(token).json(&body).send().await?;
    Ok((res.status(), res.json().await?))
}

async fn listed(client: &reqwest::Client, url: String, token: &str, match_id: &str) -> Result<bool> {
    let res = client.get(url).bearer_auth(token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    let matches = body["data"].as_array().context("match list")?;
    Ok(matches.iter().any(|m| m["id"] == match_id))
}

/// Join requests, host review, team balancing and private listings
#[tokio::test]
async fn private_match_roster_flow() -> Result<()> {
    let Some(pool) = common::migrated_pool().await? else {
        eprintln!("DATABASE_URL not set; skipping match flow");
        return Ok(());
    };

    let admin_id = common::seed_profile(&pool, Role::Admin).await?;
    let sport_id = common::seed_sport(&pool).await?;
    let host = Player::seed(&pool).await?;
    let p1 = Player::seed(&pool).await?;
    let p2 = Player::seed(&pool).await?;
    let p3 = Player::seed(&pool).await?;
    let p4 = Player::seed(&pool).await?;
    let outsider = Player::seed(&pool).await?;

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let admin = common::token_for(&admin_id.to_string(), Role::Admin);
    let (_, facility_id) = common::create_facility(server, &admin, sport_id, 60).await?;

    // Host creates a private match for four and plays on A
    let starts_at = (Utc::now() + Duration::days(20)).duration_trunc(Duration::hours(1))?;
    let (status, created) = post(
        &client,
        server.url("/api/matches"),
        &host.token,
        json!({
            "facilityId": facility_id,
            "startsAt": starts_at,
            "visibility": "private",
            "maxPlayers": 4
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let match_id = created["data"]["id"].as_str().context("match id")?.to_string();
    assert_eq!(created["data"]["host_id"], host.id.to_string());
    assert_eq!(created["data"]["players"][0]["team"], "A");
    assert_eq!(created["data"]["players"][0]["status"], "approved");

    let join_url = server.url(&format!("/api/matches/{}/join", match_id));
    let review_url = |player: &Player| server.url(&format!("/api/matches/{}/requests/{}/review", match_id, player.id));
    let team_url = server.url(&format!("/api/matches/{}/team", match_id));

    // The host cannot queue up for their own match
    let (status, _) = post(&client, join_url.clone(), &host.token, Value::Null).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // p1 asks to join; asking twice is a conflict
    let (status, request) = post(&client, join_url.clone(), &p1.token, Value::Null).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(request["data"]["status"], "pending");
    assert_eq!(request["data"]["team"], Value::Null);

    let (status, _) = post(&client, join_url.clone(), &p1.token, Value::Null).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    // Only the host reviews
    let (status, _) = post(&client, review_url(&p1), &outsider.token, json!({ "decision": "approved" })).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Rejected players may ask again
    let (status, rejected) = post(&client, review_url(&p1), &host.token, json!({ "decision": "rejected" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["data"]["status"], "rejected");
    assert_eq!(rejected["data"]["team"], Value::Null);

    let (status, again) = post(&client, join_url.clone(), &p1.token, Value::Null).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(again["data"]["status"], "pending");

    // Without a requested side p1 lands on the smaller team
    let (status, approved) = post(&client, review_url(&p1), &host.token, json!({ "decision": "approved" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["data"]["status"], "approved");
    assert_eq!(approved["data"]["team"], "B");

    let (status, _) = post(&client, review_url(&p1), &host.token, json!({ "decision": "rejected" })).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    for player in [&p2, &p3, &p4] {
        let (status, _) = post(&client, join_url.clone(), &player.token, Value::Null).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    // p2 fills B; a second request for B is refused rather than rerouted
    let (status, approved) = post(
        &client,
        review_url(&p2),
        &host.token,
        json!({ "decision": "approved", "assignedTeam": "B" }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["data"]["team"], "B");

    let (status, _) = post(
        &client,
        review_url(&p3),
        &host.token,
        json!({ "decision": "approved", "assignedTeam": "B" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, approved) = post(&client, review_url(&p3), &host.token, json!({ "decision": "approved" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["data"]["team"], "A");

    // Four approved players: the match is full
    let (status, body) = post(&client, review_url(&p4), &host.token, json!({ "decision": "approved" })).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Match is full");

    // Switching into a full side fails; pending players cannot switch at all
    let (status, _) = post(&client, team_url.clone(), &p1.token, json!({ "team": "A" })).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post(&client, team_url.clone(), &p4.token, json!({ "team": "B" })).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, same) = post(&client, team_url.clone(), &p1.token, json!({ "team": "B" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(same["data"]["team"], "B");

    // Roster as stored
    let res = client
        .get(server.url(&format!("/api/matches/{}", match_id)))
        .bearer_auth(&outsider.token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let detail: Value = res.json().await?;
    let players = detail["data"]["players"].as_array().context("players")?;
    let approved_on = |team: &str| {
        players
            .iter()
            .filter(|p| p["status"] == "approved" && p["team"] == team)
            .count()
    };
    assert_eq!(approved_on("A"), 2);
    assert_eq!(approved_on("B"), 2);

    // Private listings show the match to its host and approved players only
    let private = server.url("/api/matches?scope=private");
    assert!(listed(&client, private.clone(), &host.token, &match_id).await?);
    assert!(listed(&client, private.clone(), &p1.token, &match_id).await?);
    assert!(!listed(&client, private.clone(), &p4.token, &match_id).await?);
    assert!(!listed(&client, private, &outsider.token, &match_id).await?);
    assert!(!listed(&client, server.url("/api/matches?scope=public"), &p1.token, &match_id).await?);

    Ok(())
}
