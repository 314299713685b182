//! In-memory configuration store for testing and ephemeral use.
//!
//! [`MemoryStore`] holds every namespace's collection in a `HashMap`
//! behind a `RwLock` and hands out [`MemoryDriver`] instances that
//! implement the full [`ConfigDriver`] contract. Suitable for unit
//! tests, embedding, and short-lived processes; data is lost when the
//! store is dropped.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::driver::ConfigDriver;
use crate::error::{ConfigError, ConfigResult};
use crate::owner::OwnerId;
use crate::path::FieldPath;
use crate::value::{descend, remove_at, set_at};

/// Shared in-memory document store backing [`MemoryDriver`] instances.
///
/// Collections are keyed by namespace; each collection maps owner
/// identifiers to their single document. Share one store behind an `Arc`
/// to give several drivers -- across namespaces and instances -- a common
/// backend, the way a real deployment shares one database.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<OwnerId, Value>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a driver for `namespace`, addressing the owner document
    /// derived from the `instance` discriminator.
    pub fn driver(self: &Arc<Self>, instance: &str, namespace: &str) -> MemoryDriver {
        MemoryDriver {
            store: Arc::clone(self),
            namespace: namespace.to_string(),
            owner: OwnerId::derive(instance, namespace),
        }
    }

    /// Number of owner documents currently stored across all namespaces.
    pub fn document_count(&self) -> usize {
        self.collections
            .read()
            .expect("store lock poisoned")
            .values()
            .map(HashMap::len)
            .sum()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("document_count", &self.document_count())
            .finish()
    }
}

/// In-memory implementation of [`ConfigDriver`].
///
/// The owner document is created lazily on the first `set`; `get` before
/// any write reports not-found rather than an empty document.
#[derive(Debug)]
pub struct MemoryDriver {
    store: Arc<MemoryStore>,
    namespace: String,
    owner: OwnerId,
}

impl MemoryDriver {
    /// The owner identifier this driver addresses.
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

#[async_trait]
impl ConfigDriver for MemoryDriver {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get(&self, path: &FieldPath) -> ConfigResult<Value> {
        let collections = self.store.collections.read().expect("store lock poisoned");
        let document = collections
            .get(&self.namespace)
            .and_then(|collection| collection.get(&self.owner))
            .ok_or_else(|| ConfigError::not_found(path))?;
        descend(document, path.segments())
            .cloned()
            .ok_or_else(|| ConfigError::not_found(path))
    }

    async fn set(&self, path: &FieldPath, value: Value) -> ConfigResult<()> {
        let mut collections = self.store.collections.write().expect("store lock poisoned");
        let document = collections
            .entry(self.namespace.clone())
            .or_default()
            .entry(self.owner.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        set_at(document, path.segments(), value);
        debug!(namespace = %self.namespace, path = %path, "field set");
        Ok(())
    }

    async fn clear(&self, path: &FieldPath) -> ConfigResult<()> {
        let mut collections = self.store.collections.write().expect("store lock poisoned");
        if let Some(document) = collections
            .get_mut(&self.namespace)
            .and_then(|collection| collection.get_mut(&self.owner))
        {
            let removed = remove_at(document, path.segments());
            debug!(namespace = %self.namespace, path = %path, removed, "field cleared");
        }
        Ok(())
    }
}
