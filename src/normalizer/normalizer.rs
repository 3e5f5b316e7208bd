use anyhow::Result;
use tracing::{debug, info};

use crate::normalizer::{SrtNormalizer, TranscriptNormalizer, VttNormalizer};
use crate::subtitle::SubtitleFormat;

/// Enum to hold the normalizer for each supported subtitle format
pub enum Normalizer {
    Srt(SrtNormalizer),
    Vtt(VttNormalizer),
}

impl Normalizer {
    /// Create the normalizer matching the format the downloader converts to
    pub fn create(format: SubtitleFormat) -> Result<Self> {
        info!("Creating {} normalizer", format);
        match format {
            SubtitleFormat::Srt => Ok(Normalizer::Srt(SrtNormalizer::new()?)),
            SubtitleFormat::Vtt => Ok(Normalizer::Vtt(VttNormalizer::new()?)),
        }
    }

    /// Run normalization using the appropriate normalizer
    pub fn run(&self, raw: &str) -> String {
        let normalizer: &dyn TranscriptNormalizer = match self {
            Normalizer::Srt(n) => n,
            Normalizer::Vtt(n) => n,
        };
        debug!("Running {}", normalizer.name());
        normalizer.normalize(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_format() {
        assert!(matches!(
            Normalizer::create(SubtitleFormat::Srt).unwrap(),
            Normalizer::Srt(_)
        ));
        assert!(matches!(
            Normalizer::create(SubtitleFormat::Vtt).unwrap(),
            Normalizer::Vtt(_)
        ));
    }

    #[test]
    fn test_run_dispatches() {
        let vtt = Normalizer::create(SubtitleFormat::Vtt).unwrap();
        assert_eq!(
            vtt.run("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nhi there\n"),
            "hi there"
        );
    }
}
