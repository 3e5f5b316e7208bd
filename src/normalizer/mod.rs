mod normalizer;
mod srt;
mod transcript_normalizer;
mod vtt;

pub use normalizer::Normalizer;
pub use srt::{filter_structural_lines, join_lines, SrtNormalizer};
pub use transcript_normalizer::TranscriptNormalizer;
pub use vtt::VttNormalizer;
