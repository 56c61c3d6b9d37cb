//! Prompt compression for chain-of-thought text.
//!
//! The [`PromptCompressor`] trait is the seam for any compression model;
//! [`TokenBudgetCompressor`] is the shipped implementation: it scores tokens
//! by information content and keeps the highest-scoring ones, in original
//! order, up to a budget derived from the target rate.

pub mod budget;
pub mod scoring;
pub mod traits;

pub use budget::TokenBudgetCompressor;
pub use traits::PromptCompressor;

use serde::{Deserialize, Serialize};

/// Result of one compression call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionOutcome {
    /// The compressed text.
    pub compressed_prompt: String,
    /// Token count of the input.
    pub origin_tokens: usize,
    /// Token count of the compressed text.
    pub compressed_tokens: usize,
    /// Achieved rate: compressed / origin (1.0 for empty input).
    pub rate: f64,
}
