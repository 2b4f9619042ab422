mod common;

use anyhow::Result;
use reqwest::{header, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use playfield_api::auth::Role;

#[tokio::test]
async fn protected_routes_reject_missing_token() -> Result<()> {
    let server = common::ensure_server().await?;

    let res = reqwest::get(server.url("/api/bookings/mine")).await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body: Value = res.json().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn tokens_signed_with_another_secret_are_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let forged = playfield_api::auth::issue_token_with_secret(
        playfield_api::auth::SessionPayload {
            sub: Uuid::new_v4().to_string(),
            email: None,
            role: Role::Admin,
        },
        Some("some-other-secret"),
    )?;

    let res = reqwest::Client::new()
        .get(server.url("/api/admin/payments/pending"))
        .bearer_auth(forged)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn admin_area_sends_users_to_dashboard() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::token_for(&Uuid::new_v4().to_string(), Role::User);

    let res = reqwest::Client::new()
        .get(server.url("/api/admin/reports/bookings"))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body: Value = res.json().await?;
    assert_eq!(body["redirect"], "/dashboard");
    Ok(())
}

#[tokio::test]
async fn cannot_follow_yourself() -> Result<()> {
    let server = common::ensure_server().await?;
    let me = Uuid::new_v4().to_string();

    let res = reqwest::Client::new()
        .post(server.url(&format!("/api/users/{}/follow", me)))
        .header(header::COOKIE, format!("access_token={}", common::token_for(&me, Role::User)))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = reqwest::Client::new()
        .post(server.url(&format!("/api/users/{}/follow", me.to_uppercase())))
        .bearer_auth(common::token_for(&me, Role::User))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "You cannot perform this action on yourself");
    Ok(())
}

#[tokio::test]
async fn match_scope_and_team_are_validated() -> Result<()> {
    let server = common::ensure_server().await?;
    let token = common::token_for(&Uuid::new_v4().to_string(), Role::User);
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/api/matches?scope=everyone"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Invalid scope 'everyone'. Allowed values: public, private");

    let res = client
        .post(server.url(&format!("/api/matches/{}/team", Uuid::new_v4())))
        .bearer_auth(&token)
        .json(&json!({ "team": "C" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
