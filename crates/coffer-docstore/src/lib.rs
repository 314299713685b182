//! Document-store backend for the Coffer configuration store.
//!
//! This crate implements [`coffer_core::ConfigDriver`] against a
//! document database reached through a narrow wire seam:
//!
//! - [`StoreConfig`] -- connection target (host, port, optional
//!   credentials, database name)
//! - [`DocumentTransport`] -- the three wire primitives the driver
//!   composes: single-field projection lookup, dotted upsert, dotted
//!   removal
//! - [`Session`] -- owns the shared transport and resolves per-namespace
//!   collection handles
//! - [`DocumentDriver`] -- the [`ConfigDriver`](coffer_core::ConfigDriver)
//!   implementation
//! - [`InMemoryTransport`] -- transport with document-store semantics
//!   for tests and embedding
//!
//! # Persisted Layout
//!
//! One document per (instance, namespace) pair, identified by the owner
//! identifier, stored in a collection named after the namespace, inside
//! the configured database. Document fields mirror every path ever
//! written.

pub mod config;
pub mod driver;
pub mod error;
pub mod memory;
pub mod session;
pub mod transport;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{StoreConfig, DEFAULT_DATABASE};
pub use driver::DocumentDriver;
pub use error::{TransportError, TransportResult};
pub use memory::InMemoryTransport;
pub use session::{CollectionHandle, Session};
pub use transport::DocumentTransport;
