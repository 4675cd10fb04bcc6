//! Shared domain types for discussion creation.
//!
//! This crate contains the types passed between the form decoder, the
//! question mapper, the orchestrator and the GitHub adapters: category forms,
//! categories, repository coordinates, question descriptors and the error
//! taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod category;
pub mod discussion;
pub mod error;
pub mod form;
pub mod prompt;
pub mod repo;
