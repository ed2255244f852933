use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

mod api;
use api::GitHubClient;

mod bot;
use bot::Actionman;

mod config;
use config::ActionmanConfig;

mod webhooks;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = ActionmanConfig::parse();
    init_tracing(config.debug);
    debug!("loaded config: {:?}", config);

    let payload = read_event(&config.github_event_path)?;

    let github = match GitHubClient::new(config.github_api_url.clone(), &config.github_token) {
        Ok(github) => github,
        Err(e) => {
            error!("{:#}", e);
            return Ok(());
        }
    };

    info!(
        "handling `{}` event for {}",
        config.github_event_name, config.github_repository
    );
    Actionman::new(github)
        .run(&config.github_event_name, &payload)
        .await;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn read_event(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("error reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_event_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"zen": "Keep it logically awesome."}"#)
            .unwrap();

        let payload = read_event(file.path()).unwrap();
        assert_eq!(payload, br#"{"zen": "Keep it logically awesome."}"#);
    }

    #[test]
    fn missing_event_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");

        let err = read_event(&path).unwrap_err();
        assert_eq!(err.to_string(), format!("error reading {}", path.display()));
    }
}
