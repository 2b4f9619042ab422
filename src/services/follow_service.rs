use serde::Serialize;
use uuid::Uuid;

use crate::database::repositories::{FollowRepository, ProfileRepository};
use crate::database::BaseRepository;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct FollowOutcome {
    pub followee_id: Uuid,
    pub following: bool,
    pub changed: bool,
}

pub struct FollowService {
    follows: FollowRepository,
    profiles: ProfileRepository,
}

impl FollowService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            follows: FollowRepository::new(base.clone()),
            profiles: ProfileRepository::new(base),
        }
    }

    /// `target` has already been checked against the caller
    pub async fn follow(&self, follower_id: Uuid, target: &str) -> Result<FollowOutcome, ApiError> {
        let followee_id = parse_user_id(target)?;
        if !self.profiles.exists(followee_id).await? {
            return Err(ApiError::not_found("User not found"));
        }

        let changed = self.follows.follow(follower_id, followee_id).await?;
        if changed {
            tracing::info!("{} now follows {}", follower_id, followee_id);
        }

        Ok(FollowOutcome {
            followee_id,
            following: true,
            changed,
        })
    }

    pub async fn unfollow(&self, follower_id: Uuid, target: &str) -> Result<FollowOutcome, ApiError> {
        let followee_id = parse_user_id(target)?;
        let changed = self.follows.unfollow(follower_id, followee_id).await?;

        Ok(FollowOutcome {
            followee_id,
            following: false,
            changed,
        })
    }
}

pub(crate) fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_field("user_id", format!("Invalid UUID format: {}", raw)))
}
