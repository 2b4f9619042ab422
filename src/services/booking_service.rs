use uuid::Uuid;

use crate::database::models::Booking;
use crate::database::repositories::booking_repository;
use crate::database::repositories::BookingRepository;
use crate::database::BaseRepository;
use crate::domain::booking::Window;
use crate::domain::RuleViolation;
use crate::dto::{BookingStatsQuery, BookingStatsResponseDto, CreateBookingDto};
use crate::error::ApiError;
use crate::types::BookingStatus;

pub struct BookingService {
    repo: BookingRepository,
}

impl BookingService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            repo: BookingRepository::new(base),
        }
    }

    /// Book a facility slot.
    ///
    /// The facility row is locked for the duration of the transaction, so two
    /// requests for intersecting windows cannot both pass the overlap check.
    pub async fn create(&self, user_id: Uuid, dto: CreateBookingDto) -> Result<Booking, ApiError> {
        let window = Window::new(dto.starts_at, dto.ends_at)?;
        let facility_id = dto.facility_id;

        let booking = self
            .repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let facility = booking_repository::lock_facility(&mut **tx, facility_id)
                        .await?
                        .filter(|f| f.is_active)
                        .ok_or_else(|| ApiError::not_found("Facility not found"))?;

                    let clashes = booking_repository::overlapping(&mut **tx, facility_id, &window).await?;
                    if !clashes.is_empty() {
                        return Err(ApiError::from(RuleViolation::SlotTaken));
                    }

                    let amount = window.price(facility.price_per_hour);
                    let booking = booking_repository::insert(&mut **tx, facility_id, user_id, &window, amount).await?;
                    Ok::<_, ApiError>(booking)
                })
            })
            .await?;

        tracing::info!(
            "Booking {} created for facility {} ({} - {})",
            booking.id,
            booking.facility_id,
            booking.starts_at,
            booking.ends_at
        );
        Ok(booking)
    }

    pub async fn mine(&self, user_id: Uuid) -> Result<Vec<Booking>, ApiError> {
        Ok(self.repo.list_for_user(user_id).await?)
    }

    pub async fn cancel(&self, user_id: Uuid, booking_id: Uuid) -> Result<Booking, ApiError> {
        let booking = self
            .repo
            .find(booking_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking not found"))?;

        if booking.user_id != user_id {
            return Err(ApiError::forbidden("You can only cancel your own bookings"));
        }
        if booking.status == BookingStatus::Cancelled {
            return Ok(booking);
        }

        let cancelled = self
            .repo
            .set_status(booking_id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| ApiError::not_found("Booking not found"))?;

        tracing::info!("Booking {} cancelled by {}", booking_id, user_id);
        Ok(cancelled)
    }

    pub async fn stats(&self, query: &BookingStatsQuery) -> Result<BookingStatsResponseDto, ApiError> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if to <= from {
                return Err(ApiError::invalid_field("to", "must be after from"));
            }
        }
        Ok(self.repo.stats(query).await?)
    }
}
