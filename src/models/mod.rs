//! Domain and transport models for the note service
//!
//! `Note` is the only domain entity; the rest are HTTP request/response DTOs.

pub mod note;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use note::Note;
pub use requests::SeedRequest;
pub use responses::HealthResponse;
