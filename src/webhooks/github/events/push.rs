use serde::{de::IgnoredAny, Deserialize};

use crate::webhooks::github::events::{GitHubUser, Repository};

#[derive(Debug, Deserialize)]
pub struct PushEvent {
    pub repository: Repository,
    pub sender: GitHubUser,
    pub commits: Vec<IgnoredAny>,
    pub r#ref: String,
}
