//! Store Module
//!
//! Note persistence behind a single async trait, with a MongoDB primary
//! store and a Redis cache store. The in-memory store backs the test suites.

mod memory;
mod mongo;
mod redis;


use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Note;

// Re-export public types
pub use self::memory::MemoryNoteStore;
pub use self::mongo::MongoNoteStore;
pub use self::redis::RedisNoteStore;

// == Store Kind ==
/// Which role a store plays in the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Canonical document store
    Primary,
    /// Denormalized mirror
    Cache,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Primary => f.write_str("primary"),
            StoreKind::Cache => f.write_str("cache"),
        }
    }
}

// == Seed Outcome ==
/// Result of a lookup-then-insert against one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No record with the identity existed, one was inserted
    Inserted,
    /// A record already existed and was left untouched
    AlreadyPresent,
}

// == Note Store Trait ==
/// A store holding notes indexed by `Identity`.
///
/// Implementations are shared across requests as `Arc<dyn NoteStore>` and
/// rely on their client's own thread safety. No operation is transactional.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// The role this store plays.
    fn kind(&self) -> StoreKind;

    /// Declares the lookup indexes. Idempotent; run once at startup.
    async fn ensure_indexes(&self) -> Result<()>;

    /// Returns the first note whose identity matches, or `None` on a miss.
    async fn find_by_identity(&self, identity: Uuid) -> Result<Option<Note>>;

    /// Inserts a note unconditionally. Duplicate identities are not rejected.
    async fn insert(&self, note: &Note) -> Result<()>;

    /// Inserts the note unless one with the same identity exists.
    ///
    /// The check and the insert are separate round trips, so concurrent
    /// callers can both insert.
    async fn insert_if_absent(&self, note: &Note) -> Result<SeedOutcome> {
        if self.find_by_identity(note.identity).await?.is_some() {
            return Ok(SeedOutcome::AlreadyPresent);
        }
        self.insert(note).await?;
        Ok(SeedOutcome::Inserted)
    }

    /// Releases the underlying client.
    async fn close(&self) {}
}
