//! stringstore — content-addressed string analysis service
//!
//! A single-resource HTTP API that accepts arbitrary text strings,
//! computes derived properties (hash identity, palindrome status,
//! character statistics, word count, frequency map), stores them keyed
//! by content hash, and serves retrieval, structured filtering, a
//! constrained natural-language filter translator, and deletion.
//!
//! Storage is in-memory and process-lifetime only; the record id is the
//! SHA-256 of the submitted value, so identical submissions collide by
//! construction and re-submitting an existing value is a conflict.
//!
//! ## Modules
//!
//! - [`api`]: unified axum router, health probe, CORS
//! - [`analysis`]: derived-property computation
//! - [`strings`]: record storage, filters, and REST handlers
//! - [`query`]: constrained natural-language query parsing
//! - [`config`]: configuration management
//! - [`error`]: error taxonomy and HTTP mapping

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod strings;

pub use config::ServiceConfig;
pub use error::{Error, Result};
