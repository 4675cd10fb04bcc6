//! Discussion creation trait.

use std::future::Future;

use discussion_types::discussion::NewDiscussion;
use discussion_types::error::SubmissionError;
use discussion_types::repo::RepoRef;

/// Creates discussions on the remote platform.
pub trait DiscussionPublisher: Send + Sync {
    /// Create the discussion and return its URL.
    ///
    /// A successful response without a URL is reported as
    /// [`SubmissionError::NoUrl`].
    fn create_discussion(
        &self,
        repo: &RepoRef,
        discussion: &NewDiscussion,
    ) -> impl Future<Output = Result<String, SubmissionError>> + Send;
}
