//! Rate-driven token selection.

use std::cmp::Ordering;
use std::collections::HashMap;

use cot_core::{CotError, Result};
use tracing::debug;

use crate::scoring;
use crate::traits::PromptCompressor;
use crate::CompressionOutcome;

/// Extractive compressor: keeps the `ceil(rate * n)` highest-scoring tokens
/// of the input, in their original order.
pub struct TokenBudgetCompressor {
    model: String,
}

impl TokenBudgetCompressor {
    /// `model` is an identifier carried for diagnostics; scoring is built in.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for TokenBudgetCompressor {
    fn default() -> Self {
        Self::new("token-budget")
    }
}

impl PromptCompressor for TokenBudgetCompressor {
    fn compress(&self, text: &str, rate: f64) -> Result<CompressionOutcome> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(CotError::InvalidRate(rate));
        }

        let tokens = scoring::tokenize(text);
        let origin = tokens.len();
        if origin == 0 {
            return Ok(CompressionOutcome {
                compressed_prompt: String::new(),
                origin_tokens: 0,
                compressed_tokens: 0,
                rate: 1.0,
            });
        }

        let budget = ((rate * origin as f64).ceil() as usize).clamp(1, origin);

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut scored: Vec<(usize, f64)> = Vec::with_capacity(origin);
        for (idx, token) in tokens.iter().enumerate() {
            let repeats = seen.entry(scoring::normalize(token)).or_insert(0);
            scored.push((idx, scoring::score_token(token, *repeats)));
            *repeats += 1;
        }

        // Highest score wins; ties keep the earlier token.
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let mut keep: Vec<usize> = scored[..budget].iter().map(|(idx, _)| *idx).collect();
        keep.sort_unstable();

        let compressed_prompt = keep
            .iter()
            .map(|&idx| tokens[idx])
            .collect::<Vec<_>>()
            .join(" ");
        let compressed = keep.len();

        debug!(
            model = %self.model,
            origin_tokens = origin,
            compressed_tokens = compressed,
            requested_rate = rate,
            "compressed prompt"
        );

        Ok(CompressionOutcome {
            compressed_prompt,
            origin_tokens: origin,
            compressed_tokens: compressed,
            rate: compressed as f64 / origin as f64,
        })
    }
}
