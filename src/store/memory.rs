//! In-memory note store
//!
//! Keeps notes in insertion order behind a tokio RwLock. Duplicate
//! identities are kept, matching a backend without a unique index.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Note;
use crate::store::{NoteStore, StoreKind};

// == Memory Note Store ==
/// Process-local note store.
#[derive(Debug)]
pub struct MemoryNoteStore {
    kind: StoreKind,
    /// Records paired with their store-internal key
    entries: RwLock<Vec<(u64, Note)>>,
    next_id: AtomicU64,
}

impl MemoryNoteStore {
    /// Creates an empty store playing the given role.
    pub fn new(kind: StoreKind) -> Self {
        Self {
            kind,
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Counts records carrying the given identity.
    pub async fn count_identity(&self, identity: Uuid) -> usize {
        self.entries
            .read()
            .await
            .iter()
            .filter(|(_, note)| note.identity == identity)
            .count()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    fn kind(&self) -> StoreKind {
        self.kind
    }

    async fn ensure_indexes(&self) -> Result<()> {
        debug!(store = %self.kind, "memory store needs no index");
        Ok(())
    }

    async fn find_by_identity(&self, identity: Uuid) -> Result<Option<Note>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .find(|(_, note)| note.identity == identity)
            .map(|(_, note)| note.clone()))
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.write().await.push((id, note.clone()));
        debug!(store = %self.kind, id, identity = %note.identity, "note inserted");
        Ok(())
    }
}
