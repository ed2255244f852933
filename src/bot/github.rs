use anyhow::Context;
use tracing::{debug, info};

use crate::{
    api::{IssueCommenter, IssueRef},
    bot::{
        kubectl::{handle_kubectl, KUBECTL_PREFIX},
        reply::write_comment,
        utils::shorten_content,
    },
    webhooks::{github::IssueCommentEvent, GitHubEvent},
};

const PING_PREFIX: &str = "/ping";

pub(crate) async fn handle_github_event<C>(github: &C, event: GitHubEvent) -> anyhow::Result<()>
where
    C: IssueCommenter + ?Sized,
{
    match event {
        GitHubEvent::IssueComment(event) => {
            info!("handling issue comment event");
            handle_comment(github, &event).await
        }
        GitHubEvent::Issues(_)
        | GitHubEvent::Ping(_)
        | GitHubEvent::PullRequest(_)
        | GitHubEvent::Push(_)
        | GitHubEvent::Unsupported(_) => {
            info!(event = event.name(), "unhandled event, ignoring: {}", event);
            Ok(())
        }
    }
}

async fn handle_comment<C>(github: &C, event: &IssueCommentEvent) -> anyhow::Result<()>
where
    C: IssueCommenter + ?Sized,
{
    let body = event.comment.body.as_str();
    let issue = IssueRef {
        owner: event.repository.owner.login.clone(),
        repo: event.repository.name.clone(),
        number: event.issue.number,
    };
    debug!(
        "{} commented `{}` on {} ({})",
        event.comment.user.login,
        shorten_content(body),
        issue,
        event.comment.html_url
    );

    if body.starts_with(PING_PREFIX) {
        info!("responding to /ping comment on issue {}", issue.number);
        write_comment(github, &issue, "PONG").await?;
    }

    if body.starts_with(KUBECTL_PREFIX) {
        if event.issue.is_pull_request() {
            info!("responding to /kubectl comment on PR {}", issue.number);
            handle_kubectl(github, &issue, body)
                .await
                .context("handling /kubectl")?;
        } else {
            debug!("ignoring /kubectl comment on issue {}, not a PR", issue.number);
        }
    }

    Ok(())
}
