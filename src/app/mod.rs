use crate::api::ApiServer;
use crate::config::{Config, FetchConfig};
use crate::fetch::YtDlpFetcher;
use crate::normalizer::Normalizer;
use crate::transcript::TranscriptService;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

pub async fn run_service(config: Config) -> Result<()> {
    info!("Starting captext service");

    let service = Arc::new(build_service(&config.fetch)?);
    let api_server = ApiServer::new(&config.server, service);

    info!(
        "Serving '{}' transcripts as {}",
        config.fetch.language, config.fetch.format
    );
    info!(
        "Test manually: curl -X POST http://{}:{}/get_transcript -H 'Content-Type: application/json' -d '{{\"url\": \"...\"}}'",
        config.server.host, config.server.port
    );

    api_server.start().await
}

/// Wire the yt-dlp fetcher to the normalizer for its output format.
pub fn build_service(fetch: &FetchConfig) -> Result<TranscriptService> {
    let fetcher = YtDlpFetcher::new(fetch).context("Failed to set up subtitle fetcher")?;
    let normalizer = Normalizer::create(fetch.format)?;

    Ok(TranscriptService::new(Arc::new(fetcher), normalizer))
}
