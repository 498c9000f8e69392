//! API Module
//!
//! HTTP handlers and routing for the note service.
//!
//! # Endpoints
//! - `GET /note/:id` - Look up a note in the primary store
//! - `GET /cache/note/:id` - Look up a note in the cache store
//! - `POST /generateData` - Seed a note into both stores
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
