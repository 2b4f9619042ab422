use uuid::Uuid;

use crate::database::models::Profile;
use crate::database::{BaseRepository, DatabaseError};

pub struct ProfileRepository {
    base: BaseRepository,
}

impl ProfileRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, email, full_name, role, created_at FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.base.pool())
        .await?;

        Ok(profile)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM profiles WHERE id = $1)")
            .bind(id)
            .fetch_one(self.base.pool())
            .await?;

        Ok(found)
    }
}
