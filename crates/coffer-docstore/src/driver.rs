use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use coffer_core::value::descend;
use coffer_core::{ConfigDriver, ConfigError, ConfigResult, FieldPath, OwnerId};

use crate::session::Session;

/// Document-store implementation of [`ConfigDriver`].
///
/// Composes the path codec and owner locator with the session's three
/// transport primitives: every operation is exactly one backend call
/// addressed at the owner document. Several drivers -- one per
/// namespace -- share one session.
pub struct DocumentDriver {
    namespace: String,
    owner: OwnerId,
    session: Arc<Session>,
}

impl DocumentDriver {
    /// Construct a driver for `namespace`, addressing the owner document
    /// derived from the `instance` discriminator.
    ///
    /// The discriminator is injected here rather than read from ambient
    /// state, so two processes constructing drivers for the same pair
    /// address the same stored document.
    pub fn new(instance: &str, namespace: &str, session: Arc<Session>) -> Self {
        Self {
            namespace: namespace.to_string(),
            owner: OwnerId::derive(instance, namespace),
            session,
        }
    }

    /// The owner identifier this driver addresses.
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

impl std::fmt::Debug for DocumentDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentDriver")
            .field("namespace", &self.namespace)
            .field("owner", &self.owner)
            .finish()
    }
}

#[async_trait]
impl ConfigDriver for DocumentDriver {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get(&self, path: &FieldPath) -> ConfigResult<Value> {
        let selector = path.encode();
        let collection = self.session.collection(&self.namespace);
        let partial = collection
            .find_projected(self.owner.as_str(), &selector)
            .await?;
        // No matching document and a missing field inside the partial
        // are the same condition for callers: nothing stored there.
        let document = partial.ok_or_else(|| ConfigError::not_found(path))?;
        descend(&document, path.segments())
            .cloned()
            .ok_or_else(|| ConfigError::not_found(path))
    }

    async fn set(&self, path: &FieldPath, value: Value) -> ConfigResult<()> {
        let selector = path.encode();
        let collection = self.session.collection(&self.namespace);
        collection
            .upsert_field(self.owner.as_str(), &selector, value)
            .await?;
        debug!(namespace = %self.namespace, path = %path, "field set");
        Ok(())
    }

    async fn clear(&self, path: &FieldPath) -> ConfigResult<()> {
        let selector = path.encode();
        let collection = self.session.collection(&self.namespace);
        collection
            .unset_field(self.owner.as_str(), &selector)
            .await?;
        debug!(namespace = %self.namespace, path = %path, "field cleared");
        Ok(())
    }
}
