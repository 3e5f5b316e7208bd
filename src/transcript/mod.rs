//! Request-scoped transcript pipeline: fetch into a scratch directory, read
//! the subtitle file and normalize it.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::fetch::{FetchError, SubtitleFetcher};
use crate::global;
use crate::normalizer::Normalizer;
use crate::subtitle::SubtitleDocument;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to create scratch directory: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("failed to read subtitle file: {0}")]
    Read(#[source] std::io::Error),
}

pub struct TranscriptService {
    fetcher: Arc<dyn SubtitleFetcher>,
    normalizer: Normalizer,
}

impl TranscriptService {
    pub fn new(fetcher: Arc<dyn SubtitleFetcher>, normalizer: Normalizer) -> Self {
        Self {
            fetcher,
            normalizer,
        }
    }

    /// Fetch the subtitles for `url` and return them as plain text.
    ///
    /// The scratch directory is removed when this returns, on success and
    /// on every error path.
    pub async fn transcript(&self, url: &str) -> Result<String, TranscriptError> {
        let scratch = tempfile::Builder::new()
            .prefix(&global::scratch_prefix())
            .tempdir()
            .map_err(TranscriptError::Scratch)?;
        debug!("Using scratch directory {:?}", scratch.path());

        let subtitle_path = self.fetcher.fetch(url, scratch.path()).await?;

        let bytes = tokio::fs::read(&subtitle_path)
            .await
            .map_err(TranscriptError::Read)?;
        let document = SubtitleDocument::from_bytes(&bytes);
        debug!(
            "Read {} bytes ({} cues) from {:?}",
            bytes.len(),
            document.cues().len(),
            subtitle_path
        );

        if document.is_empty() {
            warn!("Subtitle file {:?} has no content", subtitle_path);
        }

        let text = self.normalizer.run(document.as_str());
        info!(
            "Transcript for {} via {}: {} chars",
            url,
            self.fetcher.name(),
            text.len()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitle::SubtitleFormat;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Writes fixed content and remembers the scratch directory it was given.
    struct StaticFetcher {
        content: Option<&'static str>,
        seen: Mutex<Option<PathBuf>>,
    }

    #[async_trait]
    impl SubtitleFetcher for StaticFetcher {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self, _url: &str, scratch: &Path) -> Result<PathBuf, FetchError> {
            *self.seen.lock().unwrap() = Some(scratch.to_path_buf());
            match self.content {
                Some(content) => {
                    let path = scratch.join("transcript.en.srt");
                    std::fs::write(&path, content).unwrap();
                    Ok(path)
                }
                None => Err(FetchError::Failed {
                    status: "exit status: 1".to_string(),
                    stderr: "ERROR: Video unavailable".to_string(),
                }),
            }
        }
    }

    fn service(content: Option<&'static str>) -> (TranscriptService, Arc<StaticFetcher>) {
        let fetcher = Arc::new(StaticFetcher {
            content,
            seen: Mutex::new(None),
        });
        let normalizer = Normalizer::create(SubtitleFormat::Srt).unwrap();
        (TranscriptService::new(fetcher.clone(), normalizer), fetcher)
    }

    #[tokio::test]
    async fn test_transcript_success_cleans_scratch() {
        let (service, fetcher) =
            service(Some("1\n00:00:01,000 --> 00:00:02,000\nHello world\n\n"));

        let text = service.transcript("https://example.com/v").await.unwrap();
        assert_eq!(text, "Hello world");

        let scratch = fetcher.seen.lock().unwrap().clone().unwrap();
        assert!(!scratch.exists());
    }

    #[tokio::test]
    async fn test_transcript_failure_cleans_scratch() {
        let (service, fetcher) = service(None);

        let err = service.transcript("https://example.com/v").await.unwrap_err();
        assert!(matches!(err, TranscriptError::Fetch(FetchError::Failed { .. })));
        assert!(err.to_string().contains("Video unavailable"));

        let scratch = fetcher.seen.lock().unwrap().clone().unwrap();
        assert!(!scratch.exists());
    }
}
