//! In-memory document transport for testing and ephemeral use.
//!
//! [`InMemoryTransport`] implements the full [`DocumentTransport`]
//! contract over nested `HashMap`s behind a `RwLock`, with the reference
//! backend's semantics: single-field projection that preserves the
//! nested shape of the path, dotted upsert that creates documents and
//! intermediate containers, and idempotent dotted removal. It doubles as
//! the reference answer for what a real wire client must do.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use coffer_core::value::{descend, remove_at, set_at};
use coffer_core::FieldPath;

use crate::error::{TransportError, TransportResult};
use crate::transport::DocumentTransport;

type Collection = HashMap<String, Value>;
type Database = HashMap<String, Collection>;

/// An in-memory implementation of [`DocumentTransport`].
///
/// All data lives behind one `RwLock`, so every primitive is atomic with
/// respect to concurrent callers. Data is lost when the transport is
/// dropped.
#[derive(Default)]
pub struct InMemoryTransport {
    databases: RwLock<HashMap<String, Database>>,
}

impl InMemoryTransport {
    /// Create a new empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a full document for test inspection.
    pub fn document(&self, database: &str, collection: &str, id: &str) -> Option<Value> {
        self.databases
            .read()
            .ok()?
            .get(database)?
            .get(collection)?
            .get(id)
            .cloned()
    }

    /// Number of documents across all databases and collections.
    pub fn document_count(&self) -> usize {
        self.databases
            .read()
            .map(|dbs| {
                dbs.values()
                    .flat_map(Database::values)
                    .map(Collection::len)
                    .sum()
            })
            .unwrap_or(0)
    }

    fn decode(selector: &str) -> TransportResult<FieldPath> {
        FieldPath::decode(selector).map_err(|e| TransportError::Serialization(e.to_string()))
    }
}

impl std::fmt::Debug for InMemoryTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTransport")
            .field("document_count", &self.document_count())
            .finish()
    }
}

#[async_trait]
impl DocumentTransport for InMemoryTransport {
    async fn find_projected(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
    ) -> TransportResult<Option<Value>> {
        let path = Self::decode(selector)?;
        let databases = self
            .databases
            .read()
            .map_err(|_| TransportError::Unavailable("store lock poisoned".into()))?;
        let Some(document) = databases
            .get(database)
            .and_then(|db| db.get(collection))
            .and_then(|coll| coll.get(id))
        else {
            return Ok(None);
        };
        // Rebuild the nested partial shape of the projected field; a
        // document without the field projects to an empty partial.
        let mut partial = Value::Object(Map::new());
        if let Some(leaf) = descend(document, path.segments()) {
            set_at(&mut partial, path.segments(), leaf.clone());
        }
        Ok(Some(partial))
    }

    async fn upsert_field(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
        value: Value,
    ) -> TransportResult<()> {
        let path = Self::decode(selector)?;
        let mut databases = self
            .databases
            .write()
            .map_err(|_| TransportError::Unavailable("store lock poisoned".into()))?;
        let document = databases
            .entry(database.to_string())
            .or_default()
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        set_at(document, path.segments(), value);
        Ok(())
    }

    async fn unset_field(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
    ) -> TransportResult<()> {
        let path = Self::decode(selector)?;
        let mut databases = self
            .databases
            .write()
            .map_err(|_| TransportError::Unavailable("store lock poisoned".into()))?;
        if let Some(document) = databases
            .get_mut(database)
            .and_then(|db| db.get_mut(collection))
            .and_then(|coll| coll.get_mut(id))
        {
            remove_at(document, path.segments());
        }
        Ok(())
    }
}
