use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::database::models::{Booking, Facility};
use crate::database::{BaseRepository, DatabaseError};
use crate::domain::booking::Window;
use crate::dto::{BookingStatsQuery, BookingStatsResponseDto};
use crate::types::BookingStatus;

const BOOKING_COLUMNS: &str = "id, facility_id, user_id, starts_at, ends_at, status, total_amount, created_at";

pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Booking>, DatabaseError> {
        let booking = sqlx::query_as::<_, Booking>(&format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;

        Ok(booking)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Booking>, DatabaseError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY starts_at DESC"
        ))
        .bind(user_id)
        .fetch_all(self.base.pool())
        .await?;

        Ok(bookings)
    }

    pub async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Option<Booking>, DatabaseError> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {BOOKING_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.base.pool())
        .await?;

        Ok(booking)
    }

    pub async fn stats(&self, query: &BookingStatsQuery) -> Result<BookingStatsResponseDto, DatabaseError> {
        let stats = sqlx::query_as::<_, BookingStatsResponseDto>(
            "SELECT
                 COALESCE(SUM(b.total_amount) FILTER (WHERE b.status = 'confirmed'), 0)::float8 AS total_revenue,
                 COUNT(*) AS total_bookings,
                 COUNT(*) FILTER (WHERE b.status = 'confirmed') AS confirmed_bookings,
                 COUNT(*) FILTER (WHERE b.status = 'cancelled') AS cancelled_bookings
             FROM bookings b
             JOIN facilities f ON f.id = b.facility_id
             WHERE ($1::uuid IS NULL OR f.venue_id = $1)
               AND ($2::timestamptz IS NULL OR b.starts_at >= $2)
               AND ($3::timestamptz IS NULL OR b.starts_at < $3)",
        )
        .bind(query.venue_id)
        .bind(query.from)
        .bind(query.to)
        .fetch_one(self.base.pool())
        .await?;

        Ok(stats)
    }
}

/// Lock the facility row so concurrent bookings on it serialize
pub async fn lock_facility(conn: &mut PgConnection, facility_id: Uuid) -> Result<Option<Facility>, DatabaseError> {
    let facility = sqlx::query_as::<_, Facility>(
        "SELECT id, venue_id, sport_id, name, price_per_hour, is_active, created_at
         FROM facilities WHERE id = $1 FOR UPDATE",
    )
    .bind(facility_id)
    .fetch_optional(conn)
    .await?;

    Ok(facility)
}

/// Non-cancelled bookings on the facility that intersect `window`
pub async fn overlapping(
    conn: &mut PgConnection,
    facility_id: Uuid,
    window: &Window,
) -> Result<Vec<Booking>, DatabaseError> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings
         WHERE facility_id = $1
           AND status <> 'cancelled'
           AND starts_at < $3
           AND ends_at > $2"
    ))
    .bind(facility_id)
    .bind(window.starts_at)
    .bind(window.ends_at)
    .fetch_all(conn)
    .await?;

    Ok(bookings)
}

pub async fn insert(
    conn: &mut PgConnection,
    facility_id: Uuid,
    user_id: Uuid,
    window: &Window,
    total_amount: Decimal,
) -> Result<Booking, DatabaseError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "INSERT INTO bookings (facility_id, user_id, starts_at, ends_at, total_amount)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(facility_id)
    .bind(user_id)
    .bind(window.starts_at)
    .bind(window.ends_at)
    .bind(total_amount)
    .fetch_one(conn)
    .await?;

    Ok(booking)
}

/// Lock a booking row so status changes on it serialize
pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Option<Booking>, DatabaseError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(booking)
}

pub async fn update_status(
    conn: &mut PgConnection,
    id: Uuid,
    status: BookingStatus,
) -> Result<Option<Booking>, DatabaseError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(conn)
    .await?;

    Ok(booking)
}
