use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{BaseRepository, DatabaseError, DatabaseManager};
use crate::services::{BookingService, FollowService, MatchService, PaymentService, ProfileService, VenueService};

/// Shared by every handler; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: BaseRepository,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            db: BaseRepository::new(pool),
        }
    }

    /// Lazily-connected pool from `config.database`
    pub fn from_config(config: AppConfig) -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::connect_lazy(&config.database)?;
        Ok(Self::new(config, pool))
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }

    pub fn venues(&self) -> VenueService {
        VenueService::new(self.db.clone())
    }

    pub fn bookings(&self) -> BookingService {
        BookingService::new(self.db.clone())
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.db.clone())
    }

    pub fn matches(&self) -> MatchService {
        MatchService::new(self.db.clone())
    }

    pub fn follows(&self) -> FollowService {
        FollowService::new(self.db.clone())
    }

    pub fn profiles(&self) -> ProfileService {
        ProfileService::new(self.db.clone())
    }
}
