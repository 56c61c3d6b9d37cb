//! Batch orchestrator: one output file per requested ratio.

use std::path::{Path, PathBuf};

use cot_compactor::{PromptCompressor, TokenBudgetCompressor};
use cot_core::{BatchConfig, Result};
use tracing::info;

use crate::{driver, jsonl};

/// Statistics for one ratio pass.
#[derive(Debug, Clone)]
pub struct RatioSummary {
    pub ratio: f64,
    pub written: usize,
    pub mean_rate: f64,
    pub output_path: PathBuf,
}

/// Output file name for a ratio, with the percentage rounded to an integer.
pub fn output_file_name(ratio: f64) -> String {
    format!("compressed_cot_{}.jsonl", (ratio * 100.0).round() as u32)
}

/// Run the batch with the built-in compressor named by `config.model`.
pub fn batch_compress(config: &BatchConfig) -> Result<Vec<RatioSummary>> {
    let compressor = TokenBudgetCompressor::new(&config.model);
    batch_compress_with(&compressor, config)
}

/// Run the batch with a caller-supplied compressor.
///
/// The input is loaded once and treated as read-only across ratio passes.
/// Ratios run sequentially; each produces one output file and a logged
/// summary line.
pub fn batch_compress_with<C: PromptCompressor>(
    compressor: &C,
    config: &BatchConfig,
) -> Result<Vec<RatioSummary>> {
    let data = jsonl::load_jsonl(&config.input_path)?;
    info!(records = data.len(), input = %config.input_path, "loaded dataset");

    let mut summaries = Vec::with_capacity(config.ratios.len());
    for &ratio in &config.ratios {
        let output_path = Path::new(&config.output_dir).join(output_file_name(ratio));
        let compressed = driver::compress_records(&data, compressor, &config.cot_field, ratio);
        jsonl::save_jsonl(&compressed, &output_path)?;
        let mean_rate = driver::mean_rate(&compressed);
        info!(
            ratio,
            written = compressed.len(),
            mean_rate,
            output = %output_path.display(),
            "ratio pass complete"
        );
        summaries.push(RatioSummary {
            ratio,
            written: compressed.len(),
            mean_rate,
            output_path,
        });
    }
    Ok(summaries)
}
