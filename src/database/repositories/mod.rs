pub mod booking_repository;
pub mod follow_repository;
pub mod match_repository;
pub mod payment_repository;
pub mod profile_repository;
pub mod venue_repository;

pub use booking_repository::BookingRepository;
pub use follow_repository::FollowRepository;
pub use match_repository::MatchRepository;
pub use payment_repository::PaymentRepository;
pub use profile_repository::ProfileRepository;
pub use venue_repository::VenueRepository;
