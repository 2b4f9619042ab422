use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};

/// Open transaction handed to [`BaseRepository::transaction`] callbacks
pub type Tx = Transaction<'static, Postgres>;

/// Shared plumbing for every concrete repository.
///
/// Holds the pool and delegates transactions to it. Isolation level,
/// locking and retry are left to PostgreSQL.
#[derive(Clone)]
pub struct BaseRepository {
    pool: PgPool,
}

impl BaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run `callback` inside a transaction.
    ///
    /// Commits when the callback returns `Ok`. On `Err` the transaction is
    /// rolled back and the callback's error is returned unchanged.
    pub async fn transaction<T, E, F>(&self, callback: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c mut Tx) -> BoxFuture<'c, Result<T, E>> + Send,
        T: Send,
        E: From<sqlx::Error> + Send,
    {
        let mut tx = self.pool.begin().await?;

        match callback(&mut tx).await {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}
