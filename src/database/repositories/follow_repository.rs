use uuid::Uuid;

use crate::database::{BaseRepository, DatabaseError};

pub struct FollowRepository {
    base: BaseRepository,
}

impl FollowRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    /// Returns false when the follow already existed
    pub async fn follow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO follows (follower_id, followee_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(self.base.pool())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Returns false when there was nothing to remove
    pub async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
            .bind(follower_id)
            .bind(followee_id)
            .execute(self.base.pool())
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
