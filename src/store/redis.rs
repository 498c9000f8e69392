//! Redis cache store
//!
//! Notes are RedisJSON documents under `Note:<internal-id>`, searchable
//! through a RediSearch index declaring `Identity` and `Description` as TAG
//! fields. Requires a Redis Stack server.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, RedisError, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{NoteError, Result};
use crate::models::Note;
use crate::store::{NoteStore, StoreKind};

const KIND: StoreKind = StoreKind::Cache;

/// Key prefix covered by the search index
pub const KEY_PREFIX: &str = "Note:";

// == Redis Note Store ==
/// Cache store backed by Redis Stack.
#[derive(Clone)]
pub struct RedisNoteStore {
    conn: ConnectionManager,
    index: String,
}

impl RedisNoteStore {
    /// Opens a managed connection to `uri`; reconnects are handled by the manager.
    pub async fn connect(uri: &str, index: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(uri).map_err(|e| NoteError::store(KIND, e))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        Ok(Self {
            conn,
            index: index.into(),
        })
    }
}

#[async_trait]
impl NoteStore for RedisNoteStore {
    fn kind(&self) -> StoreKind {
        KIND
    }

    async fn ensure_indexes(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let created: std::result::Result<(), RedisError> = redis::cmd("FT.CREATE")
            .arg(&self.index)
            .arg("ON")
            .arg("JSON")
            .arg("PREFIX")
            .arg(1)
            .arg(KEY_PREFIX)
            .arg("SCHEMA")
            .arg("$.Identity")
            .arg("AS")
            .arg("Identity")
            .arg("TAG")
            .arg("$.Description")
            .arg("AS")
            .arg("Description")
            .arg("TAG")
            .query_async(&mut conn)
            .await;

        match created {
            Ok(()) => info!(index = %self.index, "cache store index created"),
            Err(e) if is_index_exists(&e) => {
                debug!(index = %self.index, "cache store index already exists")
            }
            Err(e) => return Err(NoteError::store(KIND, e)),
        }
        Ok(())
    }

    async fn find_by_identity(&self, identity: Uuid) -> Result<Option<Note>> {
        let mut conn = self.conn.clone();
        let query = format!("@Identity:{{{}}}", escape_tag(&identity.to_string()));
        let reply: Value = redis::cmd("FT.SEARCH")
            .arg(&self.index)
            .arg(query)
            .arg("LIMIT")
            .arg(0)
            .arg(1)
            .query_async(&mut conn)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        first_search_hit(&reply)
    }

    async fn insert(&self, note: &Note) -> Result<()> {
        let mut conn = self.conn.clone();
        let key = format!("{}{}", KEY_PREFIX, Uuid::new_v4().simple());
        let json = serde_json::to_string(note).map_err(|e| NoteError::corrupt(KIND, e))?;

        redis::cmd("JSON.SET")
            .arg(&key)
            .arg("$")
            .arg(json)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(|e| NoteError::store(KIND, e))?;

        debug!(key = %key, identity = %note.identity, "note inserted");
        Ok(())
    }
}

/// RediSearch answers a duplicate FT.CREATE with "Index already exists".
fn is_index_exists(err: &RedisError) -> bool {
    err.to_string().contains("already exists")
}

/// Escapes TAG query punctuation (UUID hyphens included).
fn escape_tag(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len() * 2);
    for c in raw.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Extracts the first document from an `FT.SEARCH` reply.
///
/// The reply is `[total, key, [field, value, ...], ...]`; JSON documents
/// carry their body under the `$` field.
fn first_search_hit(reply: &Value) -> Result<Option<Note>> {
    let items = match reply {
        Value::Bulk(items) => items,
        other => {
            return Err(NoteError::corrupt(
                KIND,
                format!("unexpected search reply: {:?}", other),
            ))
        }
    };

    let fields = match items.get(2) {
        Some(Value::Bulk(fields)) => fields,
        Some(other) => {
            return Err(NoteError::corrupt(
                KIND,
                format!("unexpected search hit: {:?}", other),
            ))
        }
        None => return Ok(None),
    };

    for pair in fields.chunks(2) {
        if let [Value::Data(name), Value::Data(body)] = pair {
            if name.as_slice() == b"$" {
                let note = serde_json::from_slice(body).map_err(|e| NoteError::corrupt(KIND, e))?;
                return Ok(Some(note));
            }
        }
    }

    Err(NoteError::corrupt(KIND, "search hit has no JSON body"))
}
