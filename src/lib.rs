pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod database;
pub mod domain;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;
pub mod state;
pub mod types;
