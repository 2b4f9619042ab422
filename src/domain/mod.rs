//! Business rules that need no I/O.

pub mod booking;
pub mod matches;
pub mod venue;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("Booking must end after it starts")]
    EmptyWindow,

    #[error("Booking must last at least one minute")]
    WindowTooShort,

    #[error("Facility is already booked for the requested time")]
    SlotTaken,

    #[error("Match is full")]
    MatchFull,

    #[error("Team {0:?} is full")]
    TeamFull(crate::types::Team),
}

impl From<RuleViolation> for ApiError {
    fn from(rule: RuleViolation) -> Self {
        match rule {
            RuleViolation::EmptyWindow | RuleViolation::WindowTooShort => {
                ApiError::invalid_field("ends_at", rule.to_string())
            }
            RuleViolation::SlotTaken | RuleViolation::MatchFull | RuleViolation::TeamFull(_) => {
                ApiError::conflict(rule.to_string())
            }
        }
    }
}
