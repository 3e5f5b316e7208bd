//! CLI handler that validates the downloader setup without fetching anything.

use crate::config::Config;
use crate::fetch::YtDlpFetcher;
use anyhow::Result;
use std::path::Path;

pub async fn handle_check_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;

    let fetcher = YtDlpFetcher::new(&config.fetch)?;
    let version = fetcher.version().await?;

    println!("yt-dlp:          {} ({})", fetcher.command().display(), version);
    println!("Language:        {}", fetcher.language());
    println!(
        "Formats:         {} -> {}",
        config.fetch.download_format, config.fetch.format
    );
    println!("No playlist:     {}", config.fetch.no_playlist);
    match config.fetch.timeout_seconds {
        0 => println!("Timeout:         none"),
        secs => println!("Timeout:         {}s", secs),
    }
    println!(
        "Listen address:  http://{}:{}",
        config.server.host, config.server.port
    );

    Ok(())
}
