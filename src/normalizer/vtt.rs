use anyhow::Result;
use tracing::debug;

use crate::normalizer::{SrtNormalizer, TranscriptNormalizer};

/// Blocks that carry no caption text in WebVTT.
const NON_CUE_BLOCKS: [&str; 3] = ["NOTE", "STYLE", "REGION"];

/// Normalizer for WebVTT output. Strips the header, comment and style
/// blocks and cue identifiers, then runs the SubRip pipeline.
pub struct VttNormalizer {
    inner: SrtNormalizer,
}

impl VttNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: SrtNormalizer::new()?,
        })
    }
}

fn is_non_cue_block(first_line: &str) -> bool {
    let first = first_line.trim_start();
    if first.starts_with("WEBVTT") {
        return true;
    }
    NON_CUE_BLOCKS.iter().any(|kind| {
        first == *kind
            || first
                .strip_prefix(*kind)
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    })
}

fn flush_block<'a>(block: &mut Vec<&'a str>, kept: &mut Vec<&'a str>) {
    if let Some(first) = block.first() {
        if !is_non_cue_block(first) {
            // Anything before the timing line is a cue identifier
            let start = block.iter().position(|l| l.contains("-->")).unwrap_or(0);
            kept.extend_from_slice(&block[start..]);
            kept.push("");
        }
    }
    block.clear();
}

/// Reduce a WebVTT document to SubRip-like cue blocks.
fn strip_vtt_blocks(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut kept);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut kept);

    kept.join("\n")
}

impl TranscriptNormalizer for VttNormalizer {
    fn normalize(&self, raw: &str) -> String {
        debug!("Normalizing WebVTT subtitles");
        self.inner.normalize(&strip_vtt_blocks(raw))
    }

    fn name(&self) -> &'static str {
        "VttNormalizer"
    }
}
