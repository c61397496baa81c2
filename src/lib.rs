pub mod api;
pub mod config;
pub mod error;
pub mod maps;
pub mod models;
pub mod observability;
pub mod state;
