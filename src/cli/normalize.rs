//! CLI handler for normalizing local subtitle files.

use crate::cli::NormalizeCliArgs;
use crate::normalizer::Normalizer;
use crate::subtitle::{SubtitleDocument, SubtitleFormat};
use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

pub fn handle_normalize_command(args: NormalizeCliArgs) -> Result<()> {
    let bytes = match &args.file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let format = args
        .format
        .unwrap_or_else(|| detect_format(args.file.as_deref()));
    let document = SubtitleDocument::from_bytes(&bytes);
    let text = Normalizer::create(format)?.run(document.as_str());

    if args.stats {
        eprintln!("Format:     {}", format);
        eprintln!("Cues:       {}", document.cues().len());
        eprintln!("Input:      {} chars", document.as_str().chars().count());
        eprintln!("Transcript: {} chars", text.chars().count());
    }

    println!("{}", text);
    Ok(())
}

/// Guess the format from the file extension, falling back to SubRip.
fn detect_format(path: Option<&Path>) -> SubtitleFormat {
    path.and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .and_then(|ext| ext.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Some(Path::new("a/b.en.vtt"))),
            SubtitleFormat::Vtt
        );
        assert_eq!(detect_format(Some(Path::new("b.SRT"))), SubtitleFormat::Srt);
        assert_eq!(detect_format(Some(Path::new("b.txt"))), SubtitleFormat::Srt);
        assert_eq!(detect_format(None), SubtitleFormat::Srt);
    }
}
