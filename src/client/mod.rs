//! Typed client for calling a running Playfield API from another process.
//!
//! Used by the `playfield` CLI and by server-side callers that forward the
//! caller's session: the cookie header is passed through verbatim, a bearer
//! token becomes an `Authorization` header.

use anyhow::{anyhow, Context, Result};
use reqwest::{header, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::database::models::{PendingPayment, VenueSummary};
use crate::dto::{BookingStatsQuery, BookingStatsResponseDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Raw `Cookie` header value, e.g. `access_token=...`
    Cookie(String),
    Bearer(String),
    None,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    credentials: Credentials,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        Ok(Self {
            base_url,
            credentials,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path).with_context(|| format!("invalid path '{}'", path))?;
        let builder = self.http.request(method, url);

        Ok(match &self.credentials {
            Credentials::Cookie(cookie) => builder.header(header::COOKIE, cookie),
            Credentials::Bearer(token) => builder.bearer_auth(token),
            Credentials::None => builder,
        })
    }

    /// Send and unwrap the `{ success, data }` envelope
    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.context("request failed")?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("server answered {} without a JSON body", status))?;

        unwrap_envelope(body)
    }

    /// Health payload; a degraded server still answers with its status
    pub async fn health(&self) -> Result<Value> {
        let response = self.request(Method::GET, "/health")?.send().await.context("request failed")?;
        let body: Value = response.json().await.context("health endpoint returned invalid JSON")?;
        Ok(body.get("data").cloned().unwrap_or(body))
    }

    pub async fn venues(&self) -> Result<Vec<VenueSummary>> {
        Self::send(self.request(Method::GET, "/api/venues")?).await
    }

    pub async fn pending_payments(&self) -> Result<Vec<PendingPayment>> {
        Self::send(self.request(Method::GET, "/api/admin/payments/pending")?).await
    }

    pub async fn booking_stats(&self, query: &BookingStatsQuery) -> Result<BookingStatsResponseDto> {
        Self::send(self.request(Method::GET, "/api/admin/reports/bookings")?.query(query)).await
    }
}

fn unwrap_envelope<T: DeserializeOwned>(body: Value) -> Result<T> {
    if body.get("success").and_then(Value::as_bool) != Some(true) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("request failed");
        return Err(match body.get("code").and_then(Value::as_str) {
            Some(code) => anyhow!("{} ({})", message, code),
            None => anyhow!("{}", message),
        });
    }

    let data = body.get("data").cloned().unwrap_or(Value::Null);
    serde_json::from_value(data).context("unexpected response shape")
}
