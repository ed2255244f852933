use std::fmt::Display;

use serde::{de::IgnoredAny, Deserialize};
use url::Url;

use crate::bot::utils::shorten_content;

mod issue_comment;
mod issues;
mod ping;
mod pull_request;
mod push;

pub use issue_comment::*;
pub use issues::*;
pub use ping::*;
pub use pull_request::*;
pub use push::*;

#[derive(Debug)]
pub enum GitHubEvent {
    IssueComment(IssueCommentEvent),
    Issues(IssuesEvent),
    Ping(PingEvent),
    PullRequest(PullRequestEvent),
    Push(PushEvent),
    /// An event we don't know how to decode, with the name GitHub gave it.
    Unsupported(String),
}

impl GitHubEvent {
    /// Name of the event, as GitHub sends it in `X-GitHub-Event` / `GITHUB_EVENT_NAME`.
    pub fn name(&self) -> &str {
        match self {
            Self::IssueComment(_) => "issue_comment",
            Self::Issues(_) => "issues",
            Self::Ping(_) => "ping",
            Self::PullRequest(_) => "pull_request",
            Self::Push(_) => "push",
            Self::Unsupported(name) => name,
        }
    }
}

impl Display for GitHubEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IssueComment(ev) => write!(
                f,
                "[{}] {} {} comment on {}",
                ev.repository.full_name, ev.sender.login, ev.action, ev.issue
            ),
            Self::Issues(ev) => write!(
                f,
                "[{}] {} {} issue {}",
                ev.repository.full_name, ev.sender.login, ev.action, ev.issue
            ),
            Self::Ping(ev) => match &ev.repository {
                Some(repo) => write!(f, "[{}] ping: {}", repo.full_name, ev.zen),
                None => write!(f, "ping: {}", ev.zen),
            },
            Self::PullRequest(ev) => write!(
                f,
                "[{}] {} {} {}",
                ev.repository.full_name, ev.sender.login, ev.action, ev.pull_request
            ),
            Self::Push(ev) => write!(
                f,
                "[{}] {} pushed {} commit(s) to {}",
                ev.repository.full_name,
                ev.sender.login,
                ev.commits.len(),
                ev.r#ref
            ),
            Self::Unsupported(name) => write!(f, "unsupported event `{}`", name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: GitHubUser,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    // an issue can be a PR, in this case the object contains a `pull_request` key with urls to the
    // PR
    pub pull_request: Option<IgnoredAny>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({})", self.number, shorten_content(&self.title))
    }
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub html_url: Url,
    pub body: String,
    pub user: GitHubUser,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: GitHubUser,
}

impl Display for PullRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PR #{}: {} by {}",
            self.number,
            shorten_content(&self.title),
            self.user.login
        )
    }
}
