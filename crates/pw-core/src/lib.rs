//! pw-core - Core library for Phasewise
//!
//! This crate provides the shared types, configuration parsing, and
//! migration-script discovery used across all Phasewise components.

pub mod config;
pub mod error;
pub mod phase;
pub mod script;
pub mod store;

pub use config::{Config, MongoConfig, MongoOptions};
pub use error::{CoreError, CoreResult};
pub use phase::Phase;
pub use script::{ScriptFile, ScriptId};
pub use store::list_scripts;
