//! Target repository resolution.
//!
//! Order: the `--repo` flag, then `GH_REPO`, then the git remotes of the
//! current directory. Among remotes, `upstream` beats `github` beats `origin`;
//! any other remote is used only when none of those exist.

use tokio::process::Command;
use tracing::debug;

use discussion_types::error::ConfigError;
use discussion_types::repo::RepoRef;

/// Environment variable overriding the git-remote lookup.
pub const REPO_ENV_VAR: &str = "GH_REPO";

const REMOTE_PRIORITY: [&str; 3] = ["upstream", "github", "origin"];

/// Resolve the repository to operate on.
pub async fn resolve_repository(flag: Option<&str>) -> Result<RepoRef, ConfigError> {
    if let Some(repo) = flag.map(str::trim).filter(|r| !r.is_empty()) {
        debug!(repo, "Using repository from --repo");
        return repo.parse();
    }

    if let Some(repo) = std::env::var(REPO_ENV_VAR)
        .ok()
        .filter(|r| !r.trim().is_empty())
    {
        debug!(repo = %repo, "Using repository from {REPO_ENV_VAR}");
        return repo.trim().parse();
    }

    let output = Command::new("git")
        .args(["remote", "-v"])
        .output()
        .await
        .map_err(|e| ConfigError::UnresolvedRepository(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ConfigError::UnresolvedRepository(
            stderr.trim().to_string(),
        ));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    pick_remote(&listing).ok_or_else(|| {
        ConfigError::UnresolvedRepository("no git remotes found".to_string())
    })
}

/// Choose a repository from `git remote -v` output.
///
/// Lines look like `origin\tgit@github.com:octo/widgets.git (fetch)`. Remotes
/// whose URL does not parse are ignored.
pub fn pick_remote(listing: &str) -> Option<RepoRef> {
    let mut remotes: Vec<(&str, RepoRef)> = Vec::new();

    for line in listing.lines() {
        let mut parts = line.split_whitespace();
        let (Some(name), Some(url)) = (parts.next(), parts.next()) else {
            continue;
        };
        if remotes.iter().any(|(seen, _)| *seen == name) {
            continue;
        }
        match url.parse::<RepoRef>() {
            Ok(repo) => remotes.push((name, repo)),
            Err(e) => debug!(remote = name, error = %e, "Skipping unparseable remote"),
        }
    }

    let rank = |name: &str| {
        REMOTE_PRIORITY
            .iter()
            .position(|p| *p == name)
            .unwrap_or(REMOTE_PRIORITY.len())
    };
    remotes.sort_by_key(|(name, _)| rank(name));

    let (name, repo) = remotes.into_iter().next()?;
    debug!(remote = name, repo = %repo, "Using repository from git remote");
    Some(repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_beats_origin() {
        let listing = "\
origin\tgit@github.com:me/widgets.git (fetch)
origin\tgit@github.com:me/widgets.git (push)
upstream\thttps://github.com/octo/widgets.git (fetch)
upstream\thttps://github.com/octo/widgets.git (push)
";
        let repo = pick_remote(listing).unwrap();
        assert_eq!(repo.to_string(), "octo/widgets");
    }

    #[test]
    fn test_github_beats_origin() {
        let listing = "\
origin\thttps://github.com/me/fork (fetch)
github\thttps://github.com/octo/widgets (fetch)
";
        assert_eq!(pick_remote(listing).unwrap().owner, "octo");
    }

    #[test]
    fn test_unknown_remote_used_as_last_resort() {
        let listing = "mirror\tssh://git@github.com/octo/widgets.git (fetch)\n";
        let repo = pick_remote(listing).unwrap();
        assert_eq!(repo.host, "github.com");
        assert_eq!(repo.name, "widgets");
    }

    #[test]
    fn test_unparseable_remotes_are_skipped() {
        let listing = "\
upstream\t/srv/git/local-only (fetch)
origin\tgit@github.com:octo/widgets.git (fetch)
";
        assert_eq!(pick_remote(listing).unwrap().to_string(), "octo/widgets");
    }

    #[test]
    fn test_empty_listing_yields_none() {
        assert!(pick_remote("").is_none());
    }

    #[tokio::test]
    async fn test_flag_takes_precedence() {
        let repo = resolve_repository(Some("octo/widgets")).await.unwrap();
        assert_eq!(repo.to_string(), "octo/widgets");
    }

    #[tokio::test]
    async fn test_invalid_flag_is_rejected() {
        let err = resolve_repository(Some("just-a-name")).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRepository { .. }));
    }
}
