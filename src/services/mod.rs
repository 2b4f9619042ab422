pub mod booking_service;
pub mod follow_service;
pub mod match_service;
pub mod payment_service;
pub mod profile_service;
pub mod venue_service;

pub use booking_service::BookingService;
pub use follow_service::FollowService;
pub use match_service::MatchService;
pub use payment_service::PaymentService;
pub use profile_service::ProfileService;
pub use venue_service::VenueService;

use crate::config::StorageConfig;
use crate::error::ApiError;

/// Reject image links that are not public objects in our storage bucket
pub(crate) fn check_image_url(storage: &StorageConfig, field: &str, url: Option<&str>) -> Result<(), ApiError> {
    match url {
        Some(url) if !storage.is_allowed_image_url(url) => Err(ApiError::invalid_field(
            field,
            "must be a public object URL in the configured storage bucket",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_must_match_storage() {
        let storage = StorageConfig::new(Some("https://abc.supabase.co".to_string()));
        assert!(check_image_url(&storage, "imageUrl", None).is_ok());
        assert!(check_image_url(
            &storage,
            "imageUrl",
            Some("https://abc.supabase.co/storage/v1/object/public/venues/1.png")
        )
        .is_ok());

        let err = check_image_url(&storage, "imageUrl", Some("https://cdn.example.com/1.png")).unwrap_err();
        assert!(err.to_json()["field_errors"]["imageUrl"].is_string());
    }

    #[test]
    fn without_storage_every_image_url_is_rejected() {
        let storage = StorageConfig::default();
        assert!(check_image_url(&storage, "proofUrl", Some("https://abc.supabase.co/x.png")).is_err());
    }
}
