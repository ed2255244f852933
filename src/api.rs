use std::fmt;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::config::GitHubToken;

const X_GITHUB_API_VERSION: &str = "x-github-api-version";
const GITHUB_API_VERSION: &str = "2022-11-28";
const ACTIONMAN_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// An issue or pull request we can post comments on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[async_trait]
pub trait IssueCommenter: Send + Sync {
    /// Posts a new comment with the given body on an issue or pull request.
    async fn create_comment(&self, issue: &IssueRef, body: &str) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct NewComment<'a> {
    body: &'a str,
}

pub struct GitHubClient {
    http: reqwest::Client,
    api_url: Url,
}

impl GitHubClient {
    pub fn new(api_url: Url, token: &GitHubToken) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(ACTIONMAN_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            X_GITHUB_API_VERSION,
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.0.trim()))
            .context("invalid github authorization header")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create github api client")?;

        Ok(Self { http, api_url })
    }

    fn comments_url(&self, issue: &IssueRef) -> anyhow::Result<Url> {
        let number = issue.number.to_string();
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("api url `{}` can't be a base", self.api_url))?
            .pop_if_empty()
            .extend([
                "repos",
                issue.owner.as_str(),
                issue.repo.as_str(),
                "issues",
                number.as_str(),
                "comments",
            ]);
        Ok(url)
    }
}

#[async_trait]
impl IssueCommenter for GitHubClient {
    async fn create_comment(&self, issue: &IssueRef, body: &str) -> anyhow::Result<()> {
        let url = self.comments_url(issue)?;
        trace!("POST {}", url);

        let response = self
            .http
            .post(url)
            .json(&NewComment { body })
            .send()
            .await
            .with_context(|| format!("couldn't reach github api to comment on {}", issue))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "github api answered {} when commenting on {}: {}",
                status,
                issue,
                text
            ));
        }

        debug!("created comment on {}", issue);
        Ok(())
    }
}
