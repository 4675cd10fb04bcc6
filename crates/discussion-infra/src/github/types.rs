//! GitHub GraphQL and REST wire types.

use base64::Engine;
use serde::{Deserialize, Serialize};

use discussion_types::category::{Category, Discovery};

// ---------------------------------------------------------------------------
// GraphQL envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlErrorEntry {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Category discovery
// ---------------------------------------------------------------------------

pub(crate) const DISCOVER_QUERY: &str = r#"query ($owner: String!, $repo: String!) {
  repository(owner: $owner, name: $repo) {
    id
    discussionCategories(first: 25) {
      edges {
        node {
          name
          description
          id
          slug
        }
      }
    }
  }
}"#;

#[derive(Debug, Serialize)]
pub(crate) struct DiscoverVariables<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscoverData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryNode {
    pub id: String,
    pub discussion_categories: Connection<CategoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub slug: String,
}

impl RepositoryNode {
    /// Flatten the connection into categories sorted by slug.
    pub fn into_discovery(self) -> Discovery {
        let mut categories: Vec<Category> = self
            .discussion_categories
            .edges
            .into_iter()
            .map(|edge| Category {
                id: edge.node.id,
                name: edge.node.name,
                description: edge.node.description.unwrap_or_default(),
                slug: edge.node.slug,
            })
            .collect();
        categories.sort_by(|a, b| a.slug.cmp(&b.slug));

        Discovery {
            repository_id: self.id,
            categories,
        }
    }
}

// ---------------------------------------------------------------------------
// Discussion creation
// ---------------------------------------------------------------------------

pub(crate) const CREATE_DISCUSSION_MUTATION: &str = r#"mutation CreateDiscussion(
  $repositoryId: ID!
  $categoryId: ID!
  $body: String!
  $title: String!
) {
  createDiscussion(
    input: {
      repositoryId: $repositoryId
      categoryId: $categoryId
      body: $body
      title: $title
    }
  ) {
    discussion {
      url
    }
  }
}"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDiscussionVariables<'a> {
    pub repository_id: &'a str,
    pub category_id: &'a str,
    pub body: &'a str,
    pub title: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDiscussionData {
    pub create_discussion: Option<CreateDiscussionPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateDiscussionPayload {
    pub discussion: Option<DiscussionNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DiscussionNode {
    #[serde(default)]
    pub url: String,
}

impl CreateDiscussionData {
    /// The created discussion's URL, empty when the payload carried none.
    pub fn into_url(self) -> String {
        self.create_discussion
            .and_then(|payload| payload.discussion)
            .map(|discussion| discussion.url)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// REST repository contents
// ---------------------------------------------------------------------------

/// Response of `GET /repos/{owner}/{repo}/contents/{path}` for a file.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentResponse {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: String,
    #[serde(default)]
    pub size: u64,
}

impl ContentResponse {
    /// Decode the file body. GitHub wraps base64 content at 60 columns.
    pub fn decode(&self) -> Result<Vec<u8>, String> {
        match self.encoding.as_str() {
            "base64" => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                base64::engine::general_purpose::STANDARD
                    .decode(compact)
                    .map_err(|e| format!("file of length {} is not valid base64: {e}", self.size))
            }
            other => Err(format!(
                "file of length {} has unsupported encoding '{other}'",
                self.size
            )),
        }
    }
}
