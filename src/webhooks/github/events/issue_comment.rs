use std::fmt::Display;

use serde::Deserialize;

use crate::webhooks::github::events::{Comment, GitHubUser, Issue, Repository};

/// A comment was created, edited or deleted on an issue or a pull request.
#[derive(Debug, Deserialize)]
pub struct IssueCommentEvent {
    pub action: IssueCommentAction,
    pub comment: Comment,
    pub issue: Issue,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCommentAction {
    Created,
    Edited,
    Deleted,
    #[serde(other)]
    Unknown,
}

impl Display for IssueCommentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Unknown => "touched",
        };
        f.write_str(action)
    }
}
