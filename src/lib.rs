//! Note Cache - a note service with a primary store and a cache mirror
//!
//! Notes are read from MongoDB or from a Redis copy, and seeded into both.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use models::Note;
