//! Request and response bodies exchanged at the HTTP boundary.
//!
//! Enum membership is enforced by serde while the body is parsed; value
//! constraints (lengths, ranges) by `validator` inside `ValidatedJson`.

pub mod booking;
pub mod matches;
pub mod payment;
pub mod venue;

pub use booking::{BookingStatsQuery, BookingStatsResponseDto, CreateBookingDto};
pub use matches::{CreateMatchDto, JoinDecision, ReviewJoinRequestDto, SwitchTeamDto};
pub use payment::{CreatePaymentDto, PaymentDecision, ReviewPaymentDto};
pub use venue::{CreateFacilityDto, CreateVenueDto, UpdateFacilityDto};

use rust_decimal::Decimal;
use validator::ValidationError;

pub(crate) fn non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() || amount.is_zero() {
        let mut err = ValidationError::new("range");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}
