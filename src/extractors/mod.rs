//! # Request extractors
//!
//! Guards that run before a handler body: the authenticated caller, the
//! self-action check, scope normalization and validated JSON bodies.

pub mod scope;
pub mod user;

pub use scope::{parse_scope, MatchScope, Scope, ScopeValue};
pub use user::{ensure_not_self, NotSelf};

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON body that has been deserialized and passed `Validate`
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            ApiError::validation_error(rejection.body_text(), None)
        })?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
