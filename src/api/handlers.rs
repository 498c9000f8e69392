//! API Handlers
//!
//! HTTP request handlers for each note service endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{NoteError, Result};
use crate::models::{HealthResponse, Note, SeedRequest};
use crate::seed::seed_note;
use crate::store::{MongoNoteStore, NoteStore, RedisNoteStore, StoreKind};

/// Application state shared across all handlers.
///
/// Each store is optional: an unconfigured store stays `None` and every
/// handler that needs it fails with `StoreUnavailable`.
#[derive(Clone, Default)]
pub struct AppState {
    /// Canonical document store
    pub primary: Option<Arc<dyn NoteStore>>,
    /// Denormalized mirror
    pub cache: Option<Arc<dyn NoteStore>>,
}

impl AppState {
    /// Creates a new AppState from already constructed stores.
    pub fn new(primary: Option<Arc<dyn NoteStore>>, cache: Option<Arc<dyn NoteStore>>) -> Self {
        Self { primary, cache }
    }

    /// Connects every configured store and declares its indexes.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let primary: Option<Arc<dyn NoteStore>> = match &config.mongodb_uri {
            Some(uri) => {
                let store = MongoNoteStore::connect(
                    uri,
                    &config.mongodb_database,
                    &config.mongodb_collection,
                )
                .await?;
                Some(Arc::new(store))
            }
            None => {
                warn!("MONGODB_URI not set, primary store disabled");
                None
            }
        };

        let cache: Option<Arc<dyn NoteStore>> = match &config.redis_uri {
            Some(uri) => match RedisNoteStore::connect(uri, config.redis_index.clone()).await {
                Ok(store) => Some(Arc::new(store) as Arc<dyn NoteStore>),
                Err(e) => {
                    if let Some(primary) = &primary {
                        primary.close().await;
                    }
                    return Err(e);
                }
            },
            None => {
                warn!("REDIS_URI not set, cache store disabled");
                None
            }
        };

        Self::new(primary, cache).initialize().await
    }

    /// Declares every store's indexes, releasing all stores if one fails.
    pub async fn initialize(self) -> Result<Self> {
        for store in self.stores() {
            if let Err(e) = store.ensure_indexes().await {
                warn!(store = %store.kind(), error = %e, "index creation failed, releasing stores");
                self.close().await;
                return Err(e);
            }
        }
        Ok(self)
    }

    /// Returns the store for `kind`, or `StoreUnavailable` if it isn't configured.
    pub fn store(&self, kind: StoreKind) -> Result<&dyn NoteStore> {
        let slot = match kind {
            StoreKind::Primary => &self.primary,
            StoreKind::Cache => &self.cache,
        };
        slot.as_deref().ok_or(NoteError::StoreUnavailable(kind))
    }

    /// Releases every configured store.
    pub async fn close(&self) {
        for store in self.stores() {
            store.close().await;
        }
    }

    fn stores(&self) -> impl Iterator<Item = &Arc<dyn NoteStore>> {
        self.primary.iter().chain(self.cache.iter())
    }
}

/// Looks up `id` in one store; a miss is a successful `null`.
async fn lookup(state: &AppState, kind: StoreKind, id: Uuid) -> Result<Json<Option<Note>>> {
    let note = state.store(kind)?.find_by_identity(id).await?;
    debug!(store = %kind, identity = %id, hit = note.is_some(), "note lookup");
    Ok(Json(note))
}

/// Handler for GET /note/:id
///
/// Retrieves a note from the primary store.
pub async fn get_note_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Note>>> {
    lookup(&state, StoreKind::Primary, id).await
}

/// Handler for GET /cache/note/:id
///
/// Retrieves a note from the cache store. A miss does not fall back to the
/// primary store.
pub async fn get_cached_note_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Note>>> {
    lookup(&state, StoreKind::Cache, id).await
}

/// Handler for POST /generateData
///
/// Seeds a note into the primary store, then the cache store. An empty body
/// seeds the fixed default note.
pub async fn generate_data_handler(State(state): State<AppState>, body: Bytes) -> Result<()> {
    let req = SeedRequest::from_body(&body)?;
    if let Some(error_msg) = req.validate() {
        return Err(NoteError::InvalidRequest(error_msg));
    }

    let primary = state.store(StoreKind::Primary)?;
    let cache = state.store(StoreKind::Cache)?;
    let note = req.into_note();

    let report = seed_note(primary, cache, &note).await?;
    info!(identity = %note.identity, ?report, "generateData handled");
    Ok(())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        state.primary.is_some(),
        state.cache.is_some(),
    ))
}
