// handlers/public/mod.rs - endpoints served without a token

pub mod config;
pub mod health;
pub mod root;

pub use config::image_config;
pub use health::health;
pub use root::root;
