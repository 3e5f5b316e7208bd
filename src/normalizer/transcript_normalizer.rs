/// Trait for turning a raw subtitle file into flat transcript text
pub trait TranscriptNormalizer: Send + Sync {
    /// Normalize the raw subtitle content. Must not fail for any input.
    fn normalize(&self, raw: &str) -> String;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
