use async_trait::async_trait;
use serde_json::Value;

use crate::error::ConfigResult;
use crate::path::FieldPath;

/// Operations contract for a key-path configuration store.
///
/// One driver instance serves one namespace and addresses exactly one
/// owner document within it. Applications depend only on this trait;
/// backends are substituted without touching callers.
///
/// All implementations must satisfy these invariants:
/// - `get` never substitutes a default: absence of the document or the
///   field is always signaled as not-found, so a stored `null`, `false`,
///   or `0` is distinguishable from "not stored".
/// - `set` is a single atomic backend call touching exactly the addressed
///   field. No read-before-write; concurrent writers to sibling fields of
///   the same document must not lose each other's updates.
/// - `clear` of an absent document or field is a success (idempotent).
/// - Operations may suspend on backend I/O but are not mutually
///   exclusive; concurrency is delegated to the backend session. No
///   ordering is guaranteed between a `get` and a concurrent `set` on
///   the same path -- either value may be observed, never a torn one.
#[async_trait]
pub trait ConfigDriver: Send + Sync {
    /// The namespace this driver serves.
    fn namespace(&self) -> &str;

    /// Read the value stored at `path` within the owner document.
    async fn get(&self, path: &FieldPath) -> ConfigResult<Value>;

    /// Store `value` at `path`, creating the owner document if absent.
    ///
    /// Intermediate nested containers along the path may be created
    /// implicitly; whether a non-container intermediate is replaced or
    /// rejected is backend-dependent.
    async fn set(&self, path: &FieldPath, value: Value) -> ConfigResult<()>;

    /// Remove the field at `path` from the owner document.
    async fn clear(&self, path: &FieldPath) -> ConfigResult<()>;
}
