//! Key-path configuration store contract.
//!
//! Coffer lets an application read, write, and delete hierarchically
//! nested values -- addressed by an ordered sequence of string segments
//! -- against a swappable persistence backend. This crate is the
//! contract every backend implements:
//!
//! - [`ConfigDriver`] -- the async get/set/clear operations trait
//! - [`FieldPath`] -- validated, non-empty path of opaque segments
//! - [`OwnerId`] -- deterministic owner-document identity
//! - [`value`] -- nested-value descent and mutation helpers
//! - [`MemoryStore`] / [`MemoryDriver`] -- in-memory reference driver
//!   for tests and embedding
//!
//! # Design Rules
//!
//! 1. Exactly one owner document per (instance, namespace) pair,
//!    created lazily on first write and never deleted by this contract.
//! 2. Absence is always signaled: `get` never substitutes a default, so
//!    a stored `null`/`false`/`0` is distinguishable from "not stored".
//! 3. Each of get/set/clear is a single atomic backend call; there are
//!    no multi-operation transactions and no rollback.
//! 4. Removing an absent field is success, not an error.
//! 5. Backend errors are propagated, never retried internally.

pub mod driver;
pub mod error;
pub mod memory;
pub mod owner;
pub mod path;
pub mod value;

// Re-export primary types at crate root for ergonomic imports.
pub use driver::ConfigDriver;
pub use error::{ConfigError, ConfigResult};
pub use memory::{MemoryDriver, MemoryStore};
pub use owner::OwnerId;
pub use path::{FieldPath, FIELD_SEPARATOR};
