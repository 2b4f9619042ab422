use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::database::models::{Payment, PendingPayment};
use crate::database::{BaseRepository, DatabaseError};
use crate::types::PaymentStatus;

const PAYMENT_COLUMNS: &str = "id, booking_id, user_id, amount, method, proof_url, status, created_at, reviewed_at";

pub struct NewPayment<'a> {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub method: &'a str,
    pub proof_url: Option<&'a str>,
}

pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(base: BaseRepository) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BaseRepository {
        &self.base
    }

    pub async fn insert(&self, payment: NewPayment<'_>) -> Result<Payment, DatabaseError> {
        let row = sqlx::query_as::<_, Payment>(&format!(
            "INSERT INTO payments (booking_id, user_id, amount, method, proof_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PAYMENT_COLUMNS}"
        ))
        .bind(payment.booking_id)
        .bind(payment.user_id)
        .bind(payment.amount)
        .bind(payment.method)
        .bind(payment.proof_url)
        .fetch_one(self.base.pool())
        .await?;

        Ok(row)
    }

    /// Oldest first, so admins review in arrival order
    pub async fn list_pending(&self) -> Result<Vec<PendingPayment>, DatabaseError> {
        let rows = sqlx::query_as::<_, PendingPayment>(
            "SELECT p.id, p.booking_id, p.user_id, p.amount, p.method, p.proof_url, p.status,
                    p.created_at, p.reviewed_at,
                    pr.email AS payer_email,
                    v.name AS venue_name,
                    f.name AS facility_name,
                    b.starts_at, b.ends_at
             FROM payments p
             JOIN bookings b ON b.id = p.booking_id
             JOIN facilities f ON f.id = b.facility_id
             JOIN venues v ON v.id = f.venue_id
             JOIN profiles pr ON pr.id = p.user_id
             WHERE p.status = 'pending'
             ORDER BY p.created_at",
        )
        .fetch_all(self.base.pool())
        .await?;

        Ok(rows)
    }
}

pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Option<Payment>, DatabaseError> {
    let payment = sqlx::query_as::<_, Payment>(&format!(
        "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(payment)
}

pub async fn mark_reviewed(
    conn: &mut PgConnection,
    id: Uuid,
    status: PaymentStatus,
) -> Result<Payment, DatabaseError> {
    let payment = sqlx::query_as::<_, Payment>(&format!(
        "UPDATE payments SET status = $2, reviewed_at = now() WHERE id = $1 RETURNING {PAYMENT_COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_one(conn)
    .await?;

    Ok(payment)
}
