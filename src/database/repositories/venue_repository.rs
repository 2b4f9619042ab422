use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::database::models::{Facility, Sport, Venue};
use crate::database::{BaseRepository, DatabaseError};

const VENUE_COLUMNS: &str = "id, owner_id, name, address, city, image_url, is_active, created_at";
const FACILITY_COLUMNS: &str = "id, venue_id, sport_id, name, price_per_hour, is_active, created_at";

#[derive(Debug, FromRow)]
struct VenueSportRow {
    venue_id: Uuid,
    #[sqlx(flatten)]
    sport: Sport,
}

pub struct NewVenue {
    pub owner_id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub image_url: Option<String>,
}

pub struct VenueRepository {
    base: BaseRepository,
}

impl VenueRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    pub async fn list_active(&self) -> Result<Vec<Venue>, DatabaseError> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE is_active ORDER BY name"
        ))
        .fetch_all(self.base.pool())
        .await?;

        Ok(venues)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Venue>, DatabaseError> {
        let venue = sqlx::query_as::<_, Venue>(&format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;

        Ok(venue)
    }

    /// Sports per venue, in one round trip
    pub async fn sports_for(&self, venue_ids: &[Uuid]) -> Result<Vec<(Uuid, Sport)>, DatabaseError> {
        if venue_ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, VenueSportRow>(
            "SELECT vs.venue_id, s.id, s.name, s.sport_type, s.time_bound
             FROM venue_sports vs
             JOIN sports s ON s.id = vs.sport_id
             WHERE vs.venue_id = ANY($1)
             ORDER BY s.name",
        )
        .bind(venue_ids)
        .fetch_all(self.base.pool())
        .await?;

        Ok(rows.into_iter().map(|row| (row.venue_id, row.sport)).collect())
    }

    pub async fn facilities_for(&self, venue_id: Uuid) -> Result<Vec<Facility>, DatabaseError> {
        let facilities = sqlx::query_as::<_, Facility>(&format!(
            "SELECT {FACILITY_COLUMNS} FROM facilities WHERE venue_id = $1 ORDER BY name"
        ))
        .bind(venue_id)
        .fetch_all(self.base.pool())
        .await?;

        Ok(facilities)
    }

    pub async fn insert_facility(
        &self,
        venue_id: Uuid,
        sport_id: Uuid,
        name: &str,
        price_per_hour: Decimal,
    ) -> Result<Facility, DatabaseError> {
        let facility = sqlx::query_as::<_, Facility>(&format!(
            "INSERT INTO facilities (venue_id, sport_id, name, price_per_hour)
             VALUES ($1, $2, $3, $4)
             RETURNING {FACILITY_COLUMNS}"
        ))
        .bind(venue_id)
        .bind(sport_id)
        .bind(name)
        .bind(price_per_hour)
        .fetch_one(self.base.pool())
        .await?;

        Ok(facility)
    }

    /// `None` fields keep their stored value
    pub async fn update_facility(
        &self,
        id: Uuid,
        name: Option<&str>,
        price_per_hour: Option<Decimal>,
        is_active: Option<bool>,
    ) -> Result<Option<Facility>, DatabaseError> {
        let facility = sqlx::query_as::<_, Facility>(&format!(
            "UPDATE facilities
             SET name = COALESCE($2, name),
                 price_per_hour = COALESCE($3, price_per_hour),
                 is_active = COALESCE($4, is_active)
             WHERE id = $1
             RETURNING {FACILITY_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(price_per_hour)
        .bind(is_active)
        .fetch_optional(self.base.pool())
        .await?;

        Ok(facility)
    }

    /// Whether the venue is linked to `sport_id`
    pub async fn offers_sport(&self, venue_id: Uuid, sport_id: Uuid) -> Result<bool, DatabaseError> {
        let offered: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM venue_sports WHERE venue_id = $1 AND sport_id = $2)",
        )
        .bind(venue_id)
        .bind(sport_id)
        .fetch_one(self.base.pool())
        .await?;

        Ok(offered)
    }
}

pub async fn insert_venue(conn: &mut PgConnection, venue: &NewVenue) -> Result<Venue, DatabaseError> {
    let row = sqlx::query_as::<_, Venue>(&format!(
        "INSERT INTO venues (owner_id, name, address, city, image_url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {VENUE_COLUMNS}"
    ))
    .bind(venue.owner_id)
    .bind(&venue.name)
    .bind(&venue.address)
    .bind(&venue.city)
    .bind(&venue.image_url)
    .fetch_one(conn)
    .await?;

    Ok(row)
}

/// Link sports to a venue and return them; unknown ids are skipped
pub async fn link_sports(
    conn: &mut PgConnection,
    venue_id: Uuid,
    sport_ids: &[Uuid],
) -> Result<Vec<Sport>, DatabaseError> {
    let sports = sqlx::query_as::<_, Sport>(
        "WITH linked AS (
             INSERT INTO venue_sports (venue_id, sport_id)
             SELECT $1, s.id FROM sports s WHERE s.id = ANY($2)
             ON CONFLICT DO NOTHING
             RETURNING sport_id
         )
         SELECT s.id, s.name, s.sport_type, s.time_bound
         FROM sports s JOIN linked l ON l.sport_id = s.id
         ORDER BY s.name",
    )
    .bind(venue_id)
    .bind(sport_ids)
    .fetch_all(conn)
    .await?;

    Ok(sports)
}
