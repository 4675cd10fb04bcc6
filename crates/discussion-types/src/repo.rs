//! Repository coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The only host discussions can be created on.
pub const SUPPORTED_HOST: &str = "github.com";

/// A repository on a hosting platform, e.g. `github.com/octo/widgets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: SUPPORTED_HOST.to_string(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Check that discussions can be created on this repository at all.
    pub fn ensure_supported(&self) -> Result<(), ConfigError> {
        if self.host != SUPPORTED_HOST {
            return Err(ConfigError::UnsupportedHost(self.host.clone()));
        }
        if self.owner.is_empty() || self.name.is_empty() {
            return Err(ConfigError::IncompleteRepository {
                owner: self.owner.clone(),
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    fn from_parts(input: &str, host: &str, path: &str) -> Result<Self, ConfigError> {
        let path = path.trim_matches('/');
        let (owner, name) = path.split_once('/').ok_or_else(|| invalid(input, "expected OWNER/REPO"))?;
        if name.contains('/') {
            return Err(invalid(input, "too many path segments"));
        }

        Ok(Self {
            host: normalize_host(host),
            owner: owner.to_string(),
            name: name.strip_suffix(".git").unwrap_or(name).to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = ConfigError;

    /// Accepts `OWNER/REPO`, `HOST/OWNER/REPO`, `https://HOST/OWNER/REPO`,
    /// `ssh://git@HOST/OWNER/REPO` and scp-like `git@HOST:OWNER/REPO`.
    /// A trailing `.git` is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(invalid(s, "empty repository"));
        }

        if let Some((_, rest)) = input.split_once("://") {
            let rest = rest.split_once('@').map_or(rest, |(_, r)| r);
            let (host, path) = rest.split_once('/').ok_or_else(|| invalid(input, "missing path"))?;
            return Self::from_parts(input, host, path);
        }

        if let Some(rest) = input.strip_prefix("git@") {
            let (host, path) = rest.split_once(':').ok_or_else(|| invalid(input, "missing ':'"))?;
            return Self::from_parts(input, host, path);
        }

        match input.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] => Ok(Self::new(*owner, *name)),
            [host, owner, name] => Self::from_parts(input, host, &format!("{owner}/{name}")),
            _ => Err(invalid(input, "expected [HOST/]OWNER/REPO")),
        }
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.split(':').next().unwrap_or(host).to_lowercase();
    match host.strip_prefix("www.") {
        Some(bare) => bare.to_string(),
        None => host,
    }
}

fn invalid(input: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidRepository {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
