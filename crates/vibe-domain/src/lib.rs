//! Vibe Catalog Domain Layer
//!
//! This crate contains the data model and the pure operations of the prompt
//! catalog. Infrastructure (storage slots, LLM providers) lives in other crates
//! and plugs in through the traits defined here.
//!
//! ## Key Concepts
//!
//! - **CatalogEntry**: one shareable prompt artifact, immutable once assembled
//! - **User**: author snapshot embedded by value in every entry
//! - **AnalysisResult**: ephemeral AI-suggested metadata for a raw prompt
//! - **EntryInput**: the user-editable form fields an entry is assembled from
//!
//! ## Operations
//!
//! - [`assemble`]: build a well-formed entry from input plus author
//! - [`search::filter`]: case-insensitive catalog filtering
//! - [`seed::seed_entries`]: the collection used when nothing is persisted yet

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod assembler;
pub mod entry;
pub mod error;
pub mod search;
pub mod seed;
pub mod tags;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use assembler::{assemble, assemble_at, EntryInput};
pub use entry::{now_millis, CatalogEntry, EntryId};
pub use error::DomainError;
pub use user::{User, UserRole};
