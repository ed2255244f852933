use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::{anyhow, bail};
use clap::{builder::BoolishValueParser, ArgAction, Parser};
use url::Url;

// ref https://docs.github.com/en/actions/learn-github-actions/variables#default-environment-variables
#[derive(Debug, Parser)]
#[command(version, about = "Replies to slash commands in GitHub comments")]
pub struct ActionmanConfig {
    /// Name of the repository to act on, as `owner/name`
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub github_repository: RepoRef,
    /// Path to the JSON payload of the event that triggered this run
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub github_event_path: PathBuf,
    /// Name of the event that triggered this run
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub github_event_name: String,
    /// Token to access the GitHub API with
    #[arg(long, env = "ACTIONMAN_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: GitHubToken,
    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: Url,
    /// Output debug logs. The environment variable accepts `1`/`0`, `true`/`false`, `yes`/`no`...
    #[arg(
        long,
        env = "ACTIONMAN_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,
}

/// A bearer token for the GitHub API. Never printed in logs.
#[derive(Clone)]
pub struct GitHubToken(pub String);

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(<redacted>)")
    }
}

impl From<String> for GitHubToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| anyhow!("repository `{}` should look like `owner/name`", s))?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            bail!("repository `{}` should look like `owner/name`", s);
        }

        Ok(Self {
            owner: owner.to_owned(),
            name: name.to_owned(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
