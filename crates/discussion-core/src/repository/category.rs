//! Category discovery and category form retrieval traits.

use std::future::Future;

use discussion_types::category::Discovery;
use discussion_types::error::DiscoveryError;
use discussion_types::repo::RepoRef;

/// Directory holding one category form per category slug.
pub const TEMPLATE_DIR: &str = ".github/DISCUSSION_TEMPLATE";

/// Repository path of the form for `slug`.
pub fn template_path(slug: &str) -> String {
    format!("{TEMPLATE_DIR}/{slug}.yml")
}

/// Lists a repository's discussion categories.
///
/// Implementations live in discussion-infra (e.g., `GitHubClient`).
pub trait CategoryDiscovery: Send + Sync {
    /// Fetch the repository ID and its categories, sorted by slug.
    ///
    /// An empty category list is returned as-is; deciding whether that is
    /// fatal is up to the caller.
    fn discover(
        &self,
        repo: &RepoRef,
    ) -> impl Future<Output = Result<Discovery, DiscoveryError>> + Send;
}

/// Fetches the raw category form for a category slug.
pub trait TemplateSource: Send + Sync {
    /// Return the bytes stored at [`template_path`]`(slug)`.
    ///
    /// A missing file must be reported as [`DiscoveryError::TemplateNotFound`].
    fn fetch_template(
        &self,
        repo: &RepoRef,
        slug: &str,
    ) -> impl Future<Output = Result<Vec<u8>, DiscoveryError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_path() {
        assert_eq!(template_path("q-a"), ".github/DISCUSSION_TEMPLATE/q-a.yml");
    }
}
