use tracing::{debug, error};

use crate::{api::IssueCommenter, webhooks::parse_webhook};

mod github;
use github::handle_github_event;

mod kubectl;
mod reply;

pub(crate) mod utils;

pub struct Actionman<C> {
    github: C,
}

impl<C: IssueCommenter> Actionman<C> {
    /// Creates a new [`Actionman`] bot answering comments through `github`.
    pub fn new(github: C) -> Self {
        Self { github }
    }

    /// Decodes the webhook payload of an `event_name` event and replies to it if needed.
    ///
    /// Nothing here is fatal: decoding errors and failed replies are logged, and the event is
    /// dropped.
    pub async fn run(&self, event_name: &str, payload: &[u8]) {
        let event = match parse_webhook(event_name, payload) {
            Ok(event) => event,
            Err(e) => {
                error!("parsing webhook failed: {:#}", e);
                return;
            }
        };
        debug!("received event: {:?}", event);

        if let Err(e) = handle_github_event(&self.github, event).await {
            error!("handling `{}` event: {:#}", event_name, e);
        }
    }
}
