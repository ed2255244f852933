use anyhow::Context;
use tracing::trace;

use crate::{
    api::{IssueCommenter, IssueRef},
    bot::utils::shorten_content,
};

/// Posts `message` as a new comment on `issue`.
///
/// `message` is sent as is: substituting values into a reply template is left to the caller, e.g.
/// `format!("invalid command {}, must be plan or apply", verb)`.
pub(crate) async fn write_comment<C>(
    github: &C,
    issue: &IssueRef,
    message: &str,
) -> anyhow::Result<()>
where
    C: IssueCommenter + ?Sized,
{
    trace!("replying `{}` on {}", shorten_content(message), issue);

    github
        .create_comment(issue, message)
        .await
        .context("posting reply comment")
}
