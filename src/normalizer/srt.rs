use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::normalizer::TranscriptNormalizer;

/// U+266A and the same glyph after its UTF-8 bytes were decoded as CP1252.
const MUSIC_NOTES: [&str; 2] = ["\u{266a}", "\u{e2}\u{2122}\u{aa}"];

/// Normalizer for SubRip output: drops indices and timecodes, flattens the
/// cue text into one line and removes markup and sound descriptions.
pub struct SrtNormalizer {
    markup_regex: Regex,
    parenthetical_regex: Regex,
    spaces_regex: Regex,
}

impl SrtNormalizer {
    pub fn new() -> Result<Self> {
        // Matches inline tags like <i>, </font> or <00:00:01.000>
        let markup_regex = Regex::new(r"<[^>]*>")?;
        // Matches sound descriptions like (gentle music); nesting is not handled
        let parenthetical_regex = Regex::new(r"\([^)]*\)")?;
        let spaces_regex = Regex::new(r" +")?;

        Ok(Self {
            markup_regex,
            parenthetical_regex,
            spaces_regex,
        })
    }

    pub fn strip_markup(&self, text: &str) -> String {
        self.markup_regex.replace_all(text, "").into_owned()
    }

    pub fn strip_decorations(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for note in MUSIC_NOTES {
            cleaned = cleaned.replace(note, "");
        }
        self.parenthetical_regex
            .replace_all(&cleaned, "")
            .into_owned()
    }

    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.spaces_regex.replace_all(text, " ").trim().to_string()
    }
}

/// Keep only caption text lines: blank lines, bare cue indices and
/// timecode lines are dropped.
pub fn filter_structural_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !trimmed.chars().all(|c| c.is_ascii_digit())
                && !line.contains("-->")
        })
        .collect()
}

pub fn join_lines(lines: &[&str]) -> String {
    lines.join(" ")
}

impl TranscriptNormalizer for SrtNormalizer {
    fn normalize(&self, raw: &str) -> String {
        debug!("Normalizing SRT subtitles");

        let lines = filter_structural_lines(raw);
        let joined = join_lines(&lines);
        let unmarked = self.strip_markup(&joined);
        let undecorated = self.strip_decorations(&unmarked);
        let result = self.collapse_whitespace(&undecorated);

        debug!(
            "Normalized {} chars ({} text lines) to {} chars",
            raw.len(),
            lines.len(),
            result.len()
        );

        result
    }

    fn name(&self) -> &'static str {
        "SrtNormalizer"
    }
}
