//! CLI handler for one-off transcript fetches.

use crate::app::build_service;
use crate::cli::FetchCliArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub async fn handle_fetch_command(args: FetchCliArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let service = build_service(&config.fetch)?;

    let text = service
        .transcript(&args.url)
        .await
        .with_context(|| format!("Failed to fetch transcript for {}", args.url))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &text)
                .with_context(|| format!("Failed to write transcript to {:?}", path))?;
            info!("Transcript written to {:?}", path);
        }
        None => println!("{}", text),
    }

    Ok(())
}
