use serde::{Deserialize, Serialize};

/// Everything the creation mutation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDiscussion {
    pub repository_id: String,
    pub category_id: String,
    pub title: String,
    pub body: String,
}

/// What a `create` run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The discussion exists at `url`.
    Created { url: String, discussion: NewDiscussion },
    /// Dry run: the discussion that would have been submitted.
    DryRun(NewDiscussion),
}
