pub mod github;
pub use github::{parse_webhook, GitHubEvent};
