// handlers/public/config.rs - GET /api/config/images

use axum::extract::State;
use serde::Serialize;

use crate::config::RemotePattern;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub remote_patterns: Vec<RemotePattern>,
}

/// Hosts the frontend may load remote images from
pub async fn image_config(State(state): State<AppState>) -> ApiResult<ImageConfig> {
    Ok(ApiResponse::success(ImageConfig {
        remote_patterns: state.config.storage.image_remote_patterns(),
    }))
}
