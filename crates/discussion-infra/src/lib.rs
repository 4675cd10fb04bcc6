//! Infrastructure layer for gh-discussion.
//!
//! Contains implementations of the collaborator traits defined in
//! `discussion-core` (GitHub GraphQL/REST client), plus resolution of the
//! ambient context a run needs: the target repository and the API token.

pub mod credentials;
pub mod github;
pub mod repo_context;
