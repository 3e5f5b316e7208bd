//! Subtitle fetching through an external downloader.
//!
//! A fetcher writes a subtitle file into a scratch directory owned by the
//! caller and returns its path. It never retries.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod yt_dlp;

pub use yt_dlp::YtDlpFetcher;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("{0} not found. Install it or set fetch.command_path in the config")]
    ToolNotFound(String),

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{stderr}")]
    Failed { status: String, stderr: String },

    #[error("timed out after {seconds}s")]
    TimedOut { seconds: u64 },

    #[error("no '{language}' subtitles available for this video")]
    NoSubtitles { language: String },
}

#[async_trait]
pub trait SubtitleFetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// Download the subtitle track for `url` into `scratch`.
    async fn fetch(&self, url: &str, scratch: &Path) -> Result<PathBuf, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_displays_tool_output() {
        let err = FetchError::Failed {
            status: "exit status: 1".to_string(),
            stderr: "ERROR: Video unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "ERROR: Video unavailable");
    }

    #[test]
    fn test_no_subtitles_message() {
        let err = FetchError::NoSubtitles {
            language: "en".to_string(),
        };
        assert!(err.to_string().contains("'en'"));
    }
}
