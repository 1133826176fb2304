//! pw-db - Document-store layer for Phasewise
//!
//! This crate provides the `DocumentStore` and `Ledger` traits and their
//! MongoDB implementations. The migration engine depends only on the
//! traits; connection lifecycle and the applied-state collection live here.

pub mod error;
pub mod mongo;
pub mod record;
pub mod traits;

pub use error::{DbError, DbResult};
pub use mongo::{MongoBackend, MongoLedger};
pub use record::AppliedRecord;
pub use traits::{DocumentStore, Ledger};
