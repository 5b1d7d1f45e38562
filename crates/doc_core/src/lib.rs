//! Core engine for DocDeck
//!
//! This crate contains the in-memory document store and the operations
//! exposed on top of it (list, read, edit, summarize, format prompt).

pub mod operations;
pub mod store;

pub use operations::{EditResult, PromptMessage, Role};
pub use store::DocumentStore;
