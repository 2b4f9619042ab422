use crate::database::models::Profile;
use crate::database::repositories::ProfileRepository;
use crate::database::BaseRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;

pub struct ProfileService {
    repo: ProfileRepository,
}

impl ProfileService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            repo: ProfileRepository::new(base),
        }
    }

    pub async fn whoami(&self, user: &AuthUser) -> Result<Profile, ApiError> {
        self.repo
            .find(user.uuid()?)
            .await?
            .ok_or_else(|| ApiError::not_found("Profile not found"))
    }
}
