use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Serialize;
use std::collections::HashMap;

use crate::error::ApiError;

/// Enum that can be selected with a free-text `scope` value
pub trait ScopeValue: Sized + Default {
    /// Lower-case spellings, in the order they are listed to clients
    const ALLOWED: &'static [&'static str];

    fn from_allowed(value: &str) -> Option<Self>;
}

/// Lower-case `raw` and match it against `S::ALLOWED`
pub fn parse_scope<S: ScopeValue>(raw: &str) -> Result<S, ApiError> {
    let normalized = raw.trim().to_lowercase();

    S::ALLOWED
        .iter()
        .find(|allowed| **allowed == normalized)
        .and_then(|allowed| S::from_allowed(allowed))
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "Invalid scope '{}'. Allowed values: {}",
                raw,
                S::ALLOWED.join(", ")
            ))
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchScope {
    #[default]
    Public,
    Private,
}

impl ScopeValue for MatchScope {
    const ALLOWED: &'static [&'static str] = &["public", "private"];

    fn from_allowed(value: &str) -> Option<Self> {
        match value {
            "public" => Some(MatchScope::Public),
            "private" => Some(MatchScope::Private),
            _ => None,
        }
    }
}

/// `?scope=` query parameter; absent means `S::default()`
#[derive(Debug, Clone, Copy)]
pub struct Scope<S>(pub S);

#[async_trait]
impl<S, St> FromRequestParts<St> for Scope<S>
where
    S: ScopeValue,
    St: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &St) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        match params.get("scope") {
            Some(raw) => parse_scope(raw).map(Scope),
            None => Ok(Scope(S::default())),
        }
    }
}
