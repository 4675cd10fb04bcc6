//! GitHub token resolution.
//!
//! Order: `GH_TOKEN`, then `GITHUB_TOKEN`, then whatever `gh auth token`
//! prints for github.com. Blank values are skipped.

use secrecy::SecretString;
use tokio::process::Command;
use tracing::debug;

use discussion_types::error::ConfigError;
use discussion_types::repo::SUPPORTED_HOST;

/// Environment variables consulted for a token, highest priority first.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Resolve a token for github.com or fail with [`ConfigError::MissingToken`].
pub async fn resolve_token() -> Result<SecretString, ConfigError> {
    if let Some(token) = token_from_env(|key| std::env::var(key).ok()) {
        return Ok(token);
    }

    match token_from_gh_cli().await {
        Some(token) => Ok(token),
        None => Err(ConfigError::MissingToken),
    }
}

/// First non-blank value among [`TOKEN_ENV_VARS`], looked up through `lookup`.
pub fn token_from_env<F>(lookup: F) -> Option<SecretString>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_ENV_VARS.iter().find_map(|key| {
        let value = lookup(key)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        debug!(source = key, "Using GitHub token from environment");
        Some(SecretString::from(trimmed.to_string()))
    })
}

/// Ask the `gh` CLI for its stored token. Any failure means "no token".
async fn token_from_gh_cli() -> Option<SecretString> {
    let output = Command::new("gh")
        .args(["auth", "token", "--hostname", SUPPORTED_HOST])
        .output()
        .await
        .map_err(|e| debug!(error = %e, "gh CLI not available"))
        .ok()?;

    if !output.status.success() {
        debug!(status = %output.status, "gh auth token returned no token");
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    debug!(source = "gh auth token", "Using GitHub token from gh CLI");
    Some(SecretString::from(token.to_string()))
}
