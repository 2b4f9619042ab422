pub mod manager;
pub mod migrate;
pub mod models;
pub mod repositories;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use migrate::run_migrations;
pub use repository::{BaseRepository, Tx};
