//! String store module — content-addressed storage and filtered retrieval
//!
//! Provides REST endpoints for creating, fetching, listing (with
//! structured or natural-language filters), and deleting analyzed
//! strings. Storage is in-memory and lives for the process lifetime.

pub mod filter;
pub mod handler;
pub mod store;
pub mod types;

pub use handler::{strings_router, StringsState};
pub use store::StringStore;
