//! Seed/write path
//!
//! Writes one note to the primary store and then to the cache store. Each
//! store is checked and written independently: there is no transaction, no
//! rollback and no retry, so a failure on the cache leaves the primary
//! insert in place and the two copies diverge.

use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Note;
use crate::store::{NoteStore, SeedOutcome};

/// Identity seeded when the request does not supply one
pub const DEFAULT_SEED_IDENTITY: Uuid = Uuid::from_u128(0xb86847f9_4b98_417b_b09d_601eb9bf058e);

/// Description seeded when the request does not supply one
pub const DEFAULT_SEED_DESCRIPTION: &str = "Any desc";

/// Per-store outcome of one seed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// True if the primary store received a new record
    pub primary_inserted: bool,
    /// True if the cache store received a new record
    pub cache_inserted: bool,
}

/// Seeds `note` into both stores, primary first.
///
/// The first error is returned as-is; the cache is not touched if the
/// primary store fails.
pub async fn seed_note(
    primary: &dyn NoteStore,
    cache: &dyn NoteStore,
    note: &Note,
) -> Result<SeedReport> {
    let primary_outcome = primary.insert_if_absent(note).await?;
    let cache_outcome = cache.insert_if_absent(note).await?;

    let report = SeedReport {
        primary_inserted: primary_outcome == SeedOutcome::Inserted,
        cache_inserted: cache_outcome == SeedOutcome::Inserted,
    };
    info!(
        identity = %note.identity,
        primary_inserted = report.primary_inserted,
        cache_inserted = report.cache_inserted,
        "seed complete"
    );
    Ok(report)
}
