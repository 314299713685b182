use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the single top-level document a driver reads and writes
/// within its namespace's collection.
///
/// An `OwnerId` is derived deterministically from an instance
/// discriminator and a namespace name. The same inputs always produce the
/// same identifier, so independently constructed drivers address the same
/// stored document across process restarts and separate connections --
/// identity is durable without a separate identifier-issuing step.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Derive the owner identifier for an (instance, namespace) pair.
    ///
    /// Pure and side-effect-free. The instance discriminator separates
    /// deployments sharing one backend; the namespace separates consuming
    /// modules within a deployment. An instance discriminator containing
    /// `/` can collide across pairs; keep it to a plain name.
    pub fn derive(instance: &str, namespace: &str) -> Self {
        Self(format!("{instance}/{namespace}"))
    }

    /// The identifier as stored in the backend's document-id field.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OwnerId({})", self.0)
    }
}
