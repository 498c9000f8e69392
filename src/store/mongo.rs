//! MongoDB primary store
//!
//! Canonical note records live in one collection with an ascending,
//! non-unique index on `Identity`.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
    Client, Collection, IndexModel,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{NoteError, Result};
use crate::models::Note;
use crate::store::{NoteStore, StoreKind};

const KIND: StoreKind = StoreKind::Primary;

/// Persisted shape: `{ _id, Identity, Description }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NoteDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(rename = "Identity")]
    identity: String,
    #[serde(rename = "Description")]
    description: String,
}

impl From<&Note> for NoteDocument {
    fn from(note: &Note) -> Self {
        Self {
            id: None,
            identity: note.identity.to_string(),
            description: note.description.clone(),
        }
    }
}

impl TryFrom<NoteDocument> for Note {
    type Error = NoteError;

    fn try_from(document: NoteDocument) -> Result<Self> {
        let identity =
            Uuid::parse_str(&document.identity).map_err(|e| NoteError::corrupt(KIND, e))?;
        Ok(Note::new(identity, document.description))
    }
}

// == Mongo Note Store ==
/// Primary store backed by a MongoDB collection.
#[derive(Debug, Clone)]
pub struct MongoNoteStore {
    client: Client,
    collection: Collection<NoteDocument>,
}

impl MongoNoteStore {
    /// Creates a client for `uri` bound to `database.collection`.
    ///
    /// The driver connects lazily; the first round trip happens on
    /// `ensure_indexes`.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options).map_err(|e| NoteError::store(KIND, e))?;
        let collection = client.database(database).collection(collection);

        Ok(Self { client, collection })
    }
}

#[async_trait]
impl NoteStore for MongoNoteStore {
    fn kind(&self) -> StoreKind {
        KIND
    }

    async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder().keys(doc! { "Identity": 1 }).build();
        let created = self
            .collection
            .create_index(index, None)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        info!(index = %created.index_name, "primary store index ready");
        Ok(())
    }

    async fn find_by_identity(&self, identity: Uuid) -> Result<Option<Note>> {
        let found = self
            .collection
            .find_one(doc! { "Identity": identity.to_string() }, None)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        found.map(Note::try_from).transpose()
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let result = self
            .collection
            .insert_one(NoteDocument::from(note), None)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        debug!(id = %result.inserted_id, identity = %note.identity, "note inserted");
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("primary store client shut down");
    }
}
