pub mod booking;
pub mod facility;
pub mod game;
pub mod payment;
pub mod profile;
pub mod venue;

pub use booking::Booking;
pub use facility::Facility;
pub use game::{Match, MatchPlayer};
pub use payment::{Payment, PendingPayment};
pub use profile::Profile;
pub use venue::{Sport, Venue, VenueSummary};
