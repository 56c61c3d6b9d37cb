use cot_core::Result;

use crate::CompressionOutcome;

/// Trait for prompt-compression models.
pub trait PromptCompressor: Send + Sync {
    /// Compress `text` to roughly `rate` of its original token count.
    ///
    /// `rate` must lie in (0, 1]. Implementations report the achieved rate in
    /// the outcome; it may differ from the requested one.
    fn compress(&self, text: &str, rate: f64) -> Result<CompressionOutcome>;
}
