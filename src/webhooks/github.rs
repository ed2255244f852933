use anyhow::Context;
use serde::{
    de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer},
    Deserialize,
};
use tracing::{debug, trace};

mod events;
pub use events::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GitHubEventType {
    IssueComment,
    Issues,
    Ping,
    PullRequest,
    Push,
    #[serde(other)]
    Unsupported,
}

impl GitHubEventType {
    pub fn from_name(name: &str) -> Self {
        let deserializer: StrDeserializer<'_, serde::de::value::Error> = name.into_deserializer();
        // `#[serde(other)]` catches every unknown name, so this can't fail
        Self::deserialize(deserializer).unwrap_or(Self::Unsupported)
    }
}

/// Decodes a raw webhook payload into the [`GitHubEvent`] matching `event_name`.
///
/// Events we don't know about are returned as [`GitHubEvent::Unsupported`] without looking at the
/// payload at all. Only `issue_comment` payloads must decode: the other known events are only
/// summarized in logs, so a payload we can't read for them is also [`GitHubEvent::Unsupported`].
pub fn parse_webhook(event_name: &str, payload: &[u8]) -> anyhow::Result<GitHubEvent> {
    let event_type = GitHubEventType::from_name(event_name);
    trace!("decoding `{}` payload as {:?}", event_name, event_type);

    let event = match event_type {
        GitHubEventType::IssueComment => {
            return Ok(GitHubEvent::IssueComment(decode(event_name, payload)?))
        }
        GitHubEventType::Issues => decode(event_name, payload).map(GitHubEvent::Issues),
        GitHubEventType::Ping => decode(event_name, payload).map(GitHubEvent::Ping),
        GitHubEventType::PullRequest => decode(event_name, payload).map(GitHubEvent::PullRequest),
        GitHubEventType::Push => decode(event_name, payload).map(GitHubEvent::Push),
        GitHubEventType::Unsupported => {
            return Ok(GitHubEvent::Unsupported(event_name.to_owned()))
        }
    };

    Ok(event.unwrap_or_else(|e| {
        debug!("{:#}, not summarizing it", e);
        GitHubEvent::Unsupported(event_name.to_owned())
    }))
}

fn decode<T: DeserializeOwned>(event_name: &str, payload: &[u8]) -> anyhow::Result<T> {
    serde_json::from_slice(payload)
        .with_context(|| format!("couldn't decode payload of `{}` event", event_name))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn issue_comment_payload(body: &str, on_pull_request: bool) -> Vec<u8> {
        let mut issue = json!({
            "number": 42,
            "title": "Add a staging cluster",
            "html_url": "https://github.com/prologin/actionman/issues/42",
        });
        if on_pull_request {
            issue["pull_request"] = json!({
                "url": "https://api.github.com/repos/prologin/actionman/pulls/42",
                "html_url": "https://github.com/prologin/actionman/pull/42",
            });
        }

        serde_json::to_vec(&json!({
            "action": "created",
            "issue": issue,
            "comment": {
                "id": 1337,
                "html_url": "https://github.com/prologin/actionman/issues/42#issuecomment-1337",
                "body": body,
                "user": { "login": "alice", "id": 1 },
            },
            "repository": {
                "name": "actionman",
                "full_name": "prologin/actionman",
                "owner": { "login": "prologin", "id": 2 },
                "html_url": "https://github.com/prologin/actionman",
            },
            "sender": { "login": "alice", "id": 1 },
        }))
        .unwrap()
    }

    #[test]
    fn event_type_from_name() {
        assert_eq!(
            GitHubEventType::from_name("issue_comment"),
            GitHubEventType::IssueComment
        );
        assert_eq!(
            GitHubEventType::from_name("pull_request"),
            GitHubEventType::PullRequest
        );
        assert_eq!(
            GitHubEventType::from_name("workflow_dispatch"),
            GitHubEventType::Unsupported
        );
        assert_eq!(GitHubEventType::from_name(""), GitHubEventType::Unsupported);
    }

    #[test]
    fn decode_issue_comment() {
        let payload = issue_comment_payload("/ping", false);
        let event = parse_webhook("issue_comment", &payload).unwrap();

        match event {
            GitHubEvent::IssueComment(ev) => {
                assert_eq!(ev.comment.body, "/ping");
                assert_eq!(ev.issue.number, 42);
                assert!(!ev.issue.is_pull_request());
                assert_eq!(ev.repository.owner.login, "prologin");
                assert_eq!(ev.repository.name, "actionman");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn decode_pull_request_comment() {
        let payload = issue_comment_payload("/kubectl plan prod", true);
        match parse_webhook("issue_comment", &payload).unwrap() {
            GitHubEvent::IssueComment(ev) => assert!(ev.issue.is_pull_request()),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn null_pull_request_is_not_a_pull_request() {
        let mut payload: serde_json::Value =
            serde_json::from_slice(&issue_comment_payload("/ping", false)).unwrap();
        payload["issue"]["pull_request"] = serde_json::Value::Null;
        let payload = serde_json::to_vec(&payload).unwrap();

        match parse_webhook("issue_comment", &payload).unwrap() {
            GitHubEvent::IssueComment(ev) => assert!(!ev.issue.is_pull_request()),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn unsupported_event_ignores_payload() {
        let event = parse_webhook("workflow_dispatch", b"this isn't even json").unwrap();
        match event {
            GitHubEvent::Unsupported(name) => assert_eq!(name, "workflow_dispatch"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn decode_push() {
        let payload = json!({
            "ref": "refs/heads/main",
            "commits": [{ "id": "abc" }, { "id": "def" }],
            "repository": {
                "name": "actionman",
                "full_name": "prologin/actionman",
                "owner": { "login": "prologin" },
            },
            "sender": { "login": "bob" },
        });
        let event = parse_webhook("push", &serde_json::to_vec(&payload).unwrap()).unwrap();

        assert_eq!(event.name(), "push");
        assert_eq!(
            event.to_string(),
            "[prologin/actionman] bob pushed 2 commit(s) to refs/heads/main"
        );
    }

    #[test]
    fn unreadable_unhandled_payload_is_unsupported() {
        let event = parse_webhook("push", br#"{"ref":"refs/heads/main","commits":[]}"#).unwrap();
        match event {
            GitHubEvent::Unsupported(name) => assert_eq!(name, "push"),
            other => panic!("unexpected event {:?}", other),
        }

        let event = parse_webhook("ping", b"not json").unwrap();
        assert_eq!(event.name(), "ping");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = parse_webhook("issue_comment", br#"{"action": "created"}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("couldn't decode payload of `issue_comment` event"));
    }
}
