use anyhow::bail;
use tracing::debug;

use crate::{
    api::{IssueCommenter, IssueRef},
    bot::reply::write_comment,
};

pub(crate) const KUBECTL_PREFIX: &str = "/kubectl";

const USAGE: &str = "usage: /kubectl <command> <cluster>";
const PLAN_OUTPUT: &str = "PLAN OUTPUT GOES HERE";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KubectlCommand<'a> {
    Plan { cluster: &'a str },
    Invalid { verb: &'a str },
    Usage,
}

/// Parses the first line of a comment as `/kubectl <command> <cluster>`.
///
/// Arguments are separated by exactly one space: no quoting, and consecutive spaces produce empty
/// arguments. Only fails if the line doesn't start with the `/kubectl` argument, which callers are
/// expected to have checked already.
pub(crate) fn parse_kubectl(body: &str) -> anyhow::Result<KubectlCommand<'_>> {
    let first_line = body.split('\n').next().unwrap_or_default();
    let args: Vec<&str> = first_line.split(' ').collect();

    let command = match args[..] {
        [first, ..] if first != KUBECTL_PREFIX => bail!(
            "consistency error - expected first arg {}, got {}",
            KUBECTL_PREFIX,
            first
        ),
        [_, "plan", cluster] => KubectlCommand::Plan { cluster },
        [_, verb, _] => KubectlCommand::Invalid { verb },
        _ => KubectlCommand::Usage,
    };

    Ok(command)
}

pub(crate) async fn handle_kubectl<C>(
    github: &C,
    issue: &IssueRef,
    body: &str,
) -> anyhow::Result<()>
where
    C: IssueCommenter + ?Sized,
{
    match parse_kubectl(body)? {
        KubectlCommand::Usage => write_comment(github, issue, USAGE).await,
        KubectlCommand::Plan { cluster } => {
            // TODO: run `kubectl diff` against the cluster instead of answering a placeholder
            debug!("planning on cluster `{}` for {}", cluster, issue);
            write_comment(github, issue, PLAN_OUTPUT).await
        }
        KubectlCommand::Invalid { verb } => {
            let message = format!("invalid command {}, must be plan or apply", verb);
            write_comment(github, issue, &message).await
        }
    }
}
