//! Subtitle documents as produced by the downloader.
//!
//! The transcript pipeline works on the raw text; the cue parser here is
//! only used for diagnostics (cue counts in logs and `normalize --stats`).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line-based caption format the downloader converts subtitles into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    #[default]
    Srt,
    Vtt,
}

impl SubtitleFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" | "webvtt" => Ok(SubtitleFormat::Vtt),
            other => bail!("Unsupported subtitle format '{}'. Supported: srt, vtt", other),
        }
    }
}

/// One caption unit. Timing is kept as the raw timecode text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub index: Option<u32>,
    pub start: String,
    pub end: String,
    pub lines: Vec<String>,
}

/// Raw text content of a subtitle file.
#[derive(Debug, Clone, Default)]
pub struct SubtitleDocument {
    raw: String,
}

impl SubtitleDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let raw = match raw.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => raw,
        };
        Self { raw }
    }

    /// Decode file bytes, replacing invalid UTF-8 rather than failing.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Parse cues permissively. Blocks without a timecode line are skipped.
    pub fn cues(&self) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut block: Vec<&str> = Vec::new();

        for line in self.raw.lines() {
            if line.trim().is_empty() {
                if let Some(cue) = parse_block(&block) {
                    cues.push(cue);
                }
                block.clear();
            } else {
                block.push(line);
            }
        }
        if let Some(cue) = parse_block(&block) {
            cues.push(cue);
        }

        cues
    }
}

fn parse_block(block: &[&str]) -> Option<Cue> {
    let arrow = block.iter().position(|line| line.contains("-->"))?;

    let index = if arrow > 0 {
        block[arrow - 1].trim().parse::<u32>().ok()
    } else {
        None
    };

    let (start, rest) = block[arrow].split_once("-->")?;
    // WebVTT puts cue settings after the end time
    let end = rest.split_whitespace().next().unwrap_or_default();

    Some(Cue {
        index,
        start: start.trim().to_string(),
        end: end.to_string(),
        lines: block[arrow + 1..].iter().map(|l| l.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello world\n\n\
                          2\n00:00:02,500 --> 00:00:04,000\n<i>second</i>\nline two\n\n";

    #[test]
    fn test_parse_cues() {
        let doc = SubtitleDocument::new(SAMPLE);
        let cues = doc.cues();

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].index, Some(1));
        assert_eq!(cues[0].start, "00:00:01,000");
        assert_eq!(cues[0].end, "00:00:02,000");
        assert_eq!(cues[0].lines, vec!["Hello world"]);
        assert_eq!(cues[1].lines, vec!["<i>second</i>", "line two"]);
    }

    #[test]
    fn test_parse_cues_without_index_or_trailing_blank() {
        let doc = SubtitleDocument::new("00:00:01.000 --> 00:00:02.000 align:start\nhi");
        let cues = doc.cues();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].index, None);
        assert_eq!(cues[0].end, "00:00:02.000");
        assert_eq!(cues[0].lines, vec!["hi"]);
    }

    #[test]
    fn test_blocks_without_timecode_are_skipped() {
        let doc = SubtitleDocument::new("WEBVTT\nKind: captions\n\nnot a cue\n");
        assert!(doc.cues().is_empty());
    }

    #[test]
    fn test_from_bytes_is_lossy_and_strips_bom() {
        let mut bytes = "\u{feff}caf".as_bytes().to_vec();
        bytes.push(0xff);
        let doc = SubtitleDocument::from_bytes(&bytes);

        assert!(doc.as_str().starts_with("caf"));
        assert!(doc.as_str().contains('\u{fffd}'));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("SRT".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Srt);
        assert_eq!("webvtt".parse::<SubtitleFormat>().unwrap(), SubtitleFormat::Vtt);
        assert!("ass".parse::<SubtitleFormat>().is_err());
        assert_eq!(SubtitleFormat::Vtt.to_string(), "vtt");
    }
}
