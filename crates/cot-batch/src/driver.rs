//! Per-ratio compression pass over a record set.

use cot_compactor::PromptCompressor;
use cot_core::Record;
use serde_json::Value;
use tracing::{debug, warn};

/// Compress the `cot_field` of every record at the given rate.
///
/// Each successful record is a copy of the input augmented with
/// `compressed_cot`, `original_cot_tokens`, `compressed_cot_tokens` and
/// `compression_rate`. A record whose compression call fails is dropped
/// with a diagnostic; the pass continues. No retry.
pub fn compress_records<C: PromptCompressor + ?Sized>(
    records: &[Record],
    compressor: &C,
    cot_field: &str,
    rate: f64,
) -> Vec<Record> {
    let mut compressed = Vec::with_capacity(records.len());
    for record in records {
        let text = record.text(cot_field);
        match compressor.compress(text, rate) {
            Ok(outcome) => {
                let mut enriched = record.clone();
                enriched.insert("compressed_cot", Value::String(outcome.compressed_prompt));
                enriched.insert(
                    "original_cot_tokens",
                    Value::from(outcome.origin_tokens as u64),
                );
                enriched.insert(
                    "compressed_cot_tokens",
                    Value::from(outcome.compressed_tokens as u64),
                );
                enriched.insert("compression_rate", Value::from(outcome.rate));
                debug!(
                    id = %record.id(),
                    origin_tokens = outcome.origin_tokens,
                    compressed_tokens = outcome.compressed_tokens,
                    "record compressed"
                );
                compressed.push(enriched);
            }
            Err(e) => {
                warn!(id = %record.id(), error = %e, "skipping record: compression failed");
            }
        }
    }
    compressed
}

/// Mean achieved compression rate over a compressed record set.
/// An empty set yields NaN; callers see it verbatim in the summary.
pub fn mean_rate(records: &[Record]) -> f64 {
    let sum: f64 = records
        .iter()
        .filter_map(|r| r.get("compression_rate").and_then(Value::as_f64))
        .sum();
    sum / records.len() as f64
}
