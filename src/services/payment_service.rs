use serde::Serialize;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::database::models::{Booking, Payment, PendingPayment};
use crate::database::repositories::payment_repository::{self, NewPayment};
use crate::database::repositories::{booking_repository, BookingRepository, PaymentRepository};
use crate::database::BaseRepository;
use crate::dto::{CreatePaymentDto, PaymentDecision, ReviewPaymentDto};
use crate::error::ApiError;
use crate::types::{BookingStatus, PaymentStatus};

use super::check_image_url;

#[derive(Debug, Serialize)]
pub struct PaymentReview {
    pub payment: Payment,
    pub booking: Booking,
}

pub struct PaymentService {
    payments: PaymentRepository,
    bookings: BookingRepository,
}

impl PaymentService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            payments: PaymentRepository::new(base.clone()),
            bookings: BookingRepository::new(base),
        }
    }

    pub async fn submit(
        &self,
        user_id: Uuid,
        dto: CreatePaymentDto,
        storage: &StorageConfig,
    ) -> Result<Payment, ApiError> {
        check_image_url(storage, "proofUrl", dto.proof_url.as_deref())?;

        let booking = self
            .bookings
            .find(dto.booking_id)
            .await?
            .filter(|b| b.user_id == user_id)
            .ok_or_else(|| ApiError::not_found("Booking not found"))?;

        if booking.status == BookingStatus::Cancelled {
            return Err(ApiError::conflict("Booking has been cancelled"));
        }

        let payment = self
            .payments
            .insert(NewPayment {
                booking_id: booking.id,
                user_id,
                amount: dto.amount,
                method: &dto.method,
                proof_url: dto.proof_url.as_deref(),
            })
            .await?;

        tracing::info!("Payment {} submitted for booking {}", payment.id, booking.id);
        Ok(payment)
    }

    pub async fn pending(&self) -> Result<Vec<PendingPayment>, ApiError> {
        Ok(self.payments.list_pending().await?)
    }

    /// Settle a pending payment and move its booking in the same transaction.
    ///
    /// A verified payment confirms the booking, but never revives a cancelled
    /// one: the slot may already belong to someone else. A rejected payment
    /// cancels the booking only while it is still pending.
    pub async fn review(&self, payment_id: Uuid, dto: ReviewPaymentDto) -> Result<PaymentReview, ApiError> {
        let review = self
            .payments
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let payment = payment_repository::lock(&mut **tx, payment_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Payment not found"))?;

                    if payment.status != PaymentStatus::Pending {
                        return Err(ApiError::conflict("Payment has already been reviewed"));
                    }

                    let booking = booking_repository::lock(&mut **tx, payment.booking_id)
                        .await?
                        .ok_or_else(|| ApiError::not_found("Booking not found"))?;

                    let (payment_status, booking_status) = match dto.decision {
                        PaymentDecision::Verified if booking.status == BookingStatus::Cancelled => {
                            return Err(ApiError::conflict("Booking has been cancelled"));
                        }
                        PaymentDecision::Verified => (PaymentStatus::Verified, Some(BookingStatus::Confirmed)),
                        PaymentDecision::Rejected if booking.status == BookingStatus::Pending => {
                            (PaymentStatus::Rejected, Some(BookingStatus::Cancelled))
                        }
                        PaymentDecision::Rejected => (PaymentStatus::Rejected, None),
                    };

                    let payment = payment_repository::mark_reviewed(&mut **tx, payment_id, payment_status).await?;
                    let booking = match booking_status {
                        Some(status) if status != booking.status => {
                            booking_repository::update_status(&mut **tx, booking.id, status)
                                .await?
                                .ok_or_else(|| ApiError::not_found("Booking not found"))?
                        }
                        _ => booking,
                    };

                    Ok::<_, ApiError>(PaymentReview { payment, booking })
                })
            })
            .await?;

        tracing::info!(
            "Payment {} marked {:?}; booking {} now {:?}",
            review.payment.id,
            review.payment.status,
            review.booking.id,
            review.booking.status
        );
        Ok(review)
    }
}
