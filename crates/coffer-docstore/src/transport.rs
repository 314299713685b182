//! The [`DocumentTransport`] trait defining the wire-level seam.
//!
//! The backend's network client and wire protocol are external
//! collaborators; the driver only ever needs the three primitives below,
//! each addressed at one document by id within one collection. A real
//! client implements this trait; tests use
//! [`InMemoryTransport`](crate::InMemoryTransport).

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportResult;

/// Wire-level primitives of a document store.
///
/// Implementations must be safe for concurrent use by multiple in-flight
/// operations (`Send + Sync`); a client that is not must serialize
/// access internally. Each primitive is atomic with respect to the
/// addressed field: a cancelled or timed-out call fails whole, never
/// leaving a partial write.
#[async_trait]
pub trait DocumentTransport: Send + Sync {
    /// Point lookup of the document `id` in `collection`, projecting
    /// only the dotted field `selector`.
    ///
    /// Returns `Ok(None)` when no document matches `id`. When the
    /// document exists, the partial reply preserves the nested shape of
    /// the projected path; a document that lacks the field projects to a
    /// partial without it, not to `None`.
    async fn find_projected(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
    ) -> TransportResult<Option<Value>>;

    /// Atomically set the dotted field `selector` to `value` on the
    /// document `id`, creating the document if it does not exist.
    ///
    /// Exactly the addressed field changes; siblings are untouched.
    /// Intermediate containers along the path may be created.
    async fn upsert_field(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
        value: Value,
    ) -> TransportResult<()>;

    /// Atomically remove the dotted field `selector` from the document
    /// `id`. An absent document or field is success.
    ///
    /// A backend without a native atomic nested-field removal must
    /// emulate it and document the atomicity it actually provides.
    async fn unset_field(
        &self,
        database: &str,
        collection: &str,
        id: &str,
        selector: &str,
    ) -> TransportResult<()>;
}
