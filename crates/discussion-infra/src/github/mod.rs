//! github.com adapters.
//!
//! - `client`: [`GitHubClient`], implementing category discovery, form
//!   retrieval and discussion creation
//! - `types`: GraphQL/REST request and response shapes

pub mod client;
mod types;

pub use client::GitHubClient;
