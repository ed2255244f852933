use serde::Deserialize;

use crate::webhooks::github::events::Repository;

#[derive(Debug, Deserialize)]
pub struct PingEvent {
    pub zen: String,
    pub repository: Option<Repository>,
}
