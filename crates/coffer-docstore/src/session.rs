use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::TransportResult;
use crate::transport::DocumentTransport;

/// Owns the connection to the document store and resolves collection
/// handles for namespaces.
///
/// The session is an explicit, long-lived resource: one shared transport
/// serves every driver and every in-flight operation, instead of a fresh
/// handle derived on each database access. Opening a session performs no
/// I/O -- connection establishment is the transport's concern and is
/// lazy.
pub struct Session {
    transport: Arc<dyn DocumentTransport>,
    database: String,
}

impl Session {
    /// Open a session over `transport` targeting the configured database.
    pub fn open(config: &StoreConfig, transport: Arc<dyn DocumentTransport>) -> Self {
        debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            authenticated = config.is_authenticated(),
            "session opened"
        );
        Self {
            transport,
            database: config.database.clone(),
        }
    }

    /// The database every namespace collection lives in.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Resolve the collection holding `namespace`'s documents.
    ///
    /// Deterministic given the namespace and the session's configured
    /// database: the collection is named after the namespace. The
    /// returned handle borrows the transport for the duration of one
    /// operation.
    pub fn collection<'a>(&'a self, namespace: &'a str) -> CollectionHandle<'a> {
        CollectionHandle {
            transport: self.transport.as_ref(),
            database: &self.database,
            name: namespace,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("database", &self.database)
            .finish()
    }
}

/// Cheap per-call handle addressing one collection.
///
/// Forwards each primitive to the session's transport with the
/// (database, collection) pair filled in.
pub struct CollectionHandle<'a> {
    transport: &'a dyn DocumentTransport,
    database: &'a str,
    name: &'a str,
}

impl CollectionHandle<'_> {
    /// The collection name (equal to the namespace).
    pub fn name(&self) -> &str {
        self.name
    }

    pub async fn find_projected(&self, id: &str, selector: &str) -> TransportResult<Option<Value>> {
        self.transport
            .find_projected(self.database, self.name, id, selector)
            .await
    }

    pub async fn upsert_field(
        &self,
        id: &str,
        selector: &str,
        value: Value,
    ) -> TransportResult<()> {
        self.transport
            .upsert_field(self.database, self.name, id, selector, value)
            .await
    }

    pub async fn unset_field(&self, id: &str, selector: &str) -> TransportResult<()> {
        self.transport
            .unset_field(self.database, self.name, id, selector)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryTransport;
    use serde_json::json;

    #[tokio::test]
    async fn collection_is_named_after_namespace() {
        let transport = Arc::new(InMemoryTransport::new());
        let session = Session::open(&StoreConfig::default(), transport);
        assert_eq!(session.collection("economy").name(), "economy");
    }

    #[tokio::test]
    async fn handle_targets_the_configured_database() {
        let transport = Arc::new(InMemoryTransport::new());
        let config = StoreConfig {
            database: "conf".into(),
            ..StoreConfig::default()
        };
        let session = Session::open(&config, Arc::clone(&transport) as Arc<dyn DocumentTransport>);

        session
            .collection("economy")
            .upsert_field("owner-1", "k", json!(1))
            .await
            .unwrap();

        assert!(transport.document("conf", "economy", "owner-1").is_some());
        assert!(transport.document("default_db", "economy", "owner-1").is_none());
    }
}
