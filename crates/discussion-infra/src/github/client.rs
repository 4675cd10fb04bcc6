//! GitHubClient -- concrete collaborator implementations for github.com.
//!
//! Category discovery and discussion creation go through the GraphQL API;
//! category forms are read through the REST contents API.
//!
//! The token is exposed once, when the `Authorization` header is built, and
//! that header is marked sensitive so it never shows up in debug output.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use discussion_core::repository::{
    CategoryDiscovery, DiscussionPublisher, TemplateSource, template_path,
};
use discussion_types::category::Discovery;
use discussion_types::discussion::NewDiscussion;
use discussion_types::error::{ConfigError, DiscoveryError, SubmissionError};
use discussion_types::repo::RepoRef;

use super::types::{
    CREATE_DISCUSSION_MUTATION, ContentResponse, CreateDiscussionData, CreateDiscussionVariables,
    DISCOVER_QUERY, DiscoverData, DiscoverVariables, GraphQlRequest, GraphQlResponse,
};

/// GitHub REST/GraphQL API base URL.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// REST API version pinned via `X-GitHub-Api-Version`.
const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("gh-discussion/", env!("CARGO_PKG_VERSION"));

/// Client for the github.com APIs used to create discussions.
///
/// Implements [`CategoryDiscovery`], [`TemplateSource`] and
/// [`DiscussionPublisher`]. Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a client authenticated with `token`.
    pub fn new(token: &SecretString) -> Result<Self, ConfigError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| ConfigError::Client("token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_url: GITHUB_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (useful for testing).
    pub fn with_base_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Run a GraphQL operation and return its `data`.
    ///
    /// Transport failures, non-2xx statuses and a non-empty `errors` array all
    /// come back as a single message.
    async fn graphql<V, R>(&self, query: &str, variables: V) -> Result<R, String>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/graphql", self.api_url))
            .json(&GraphQlRequest { query, variables })
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {status}: {body}"));
        }

        let payload: GraphQlResponse<R> = response
            .json()
            .await
            .map_err(|e| format!("failed to parse GraphQL response: {e}"))?;

        if !payload.errors.is_empty() {
            let messages: Vec<&str> = payload.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(messages.join("; "));
        }

        payload
            .data
            .ok_or_else(|| "GraphQL response contained no data".to_string())
    }
}

impl CategoryDiscovery for GitHubClient {
    async fn discover(&self, repo: &RepoRef) -> Result<Discovery, DiscoveryError> {
        debug!(owner = %repo.owner, repo = %repo.name, "Querying discussion categories");

        let transport = |message: String| DiscoveryError::Transport {
            repo: repo.to_string(),
            message,
        };

        let data: DiscoverData = self
            .graphql(
                DISCOVER_QUERY,
                DiscoverVariables {
                    owner: &repo.owner,
                    repo: &repo.name,
                },
            )
            .await
            .map_err(transport)?;

        let node = data
            .repository
            .ok_or_else(|| transport("repository not found".to_string()))?;

        let discovery = node.into_discovery();
        debug!(categories = discovery.categories.len(), "Received discussion categories");
        Ok(discovery)
    }
}

impl TemplateSource for GitHubClient {
    async fn fetch_template(&self, repo: &RepoRef, slug: &str) -> Result<Vec<u8>, DiscoveryError> {
        let path = template_path(slug);
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, repo.owner, repo.name, path
        );
        debug!(path = %path, "Fetching discussion category form");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DiscoveryError::Transport {
                repo: repo.to_string(),
                message: format!("failed to look up template at path {path}: {e}"),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DiscoveryError::TemplateNotFound {
                repo: repo.to_string(),
                path,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DiscoveryError::Transport {
                repo: repo.to_string(),
                message: format!("failed to look up template at path {path}: HTTP {status}: {body}"),
            });
        }

        let invalid = |message: String| DiscoveryError::InvalidContent {
            repo: repo.to_string(),
            path: path.clone(),
            message,
        };

        let content: ContentResponse = response.json().await.map_err(|e| invalid(e.to_string()))?;
        content.decode().map_err(invalid)
    }
}

impl DiscussionPublisher for GitHubClient {
    async fn create_discussion(
        &self,
        repo: &RepoRef,
        discussion: &NewDiscussion,
    ) -> Result<String, SubmissionError> {
        debug!(
            repo = %repo,
            category_id = %discussion.category_id,
            body_len = discussion.body.len(),
            "Creating discussion"
        );

        let data: CreateDiscussionData = self
            .graphql(
                CREATE_DISCUSSION_MUTATION,
                CreateDiscussionVariables {
                    repository_id: &discussion.repository_id,
                    category_id: &discussion.category_id,
                    body: &discussion.body,
                    title: &discussion.title,
                },
            )
            .await
            .map_err(|message| SubmissionError::Transport {
                repo: repo.to_string(),
                message,
            })?;

        let url = data.into_url();
        if url.is_empty() {
            return Err(SubmissionError::NoUrl(repo.to_string()));
        }
        Ok(url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
