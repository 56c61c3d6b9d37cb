//! Batch chain-of-thought compression driver.
//!
//! Loads a JSONL dataset once, then for each requested compression ratio runs
//! the prompt compressor over every record and writes one output file named
//! `compressed_cot_<pct>.jsonl`. Fully sequential and synchronous.

pub mod batch;
pub mod driver;
pub mod jsonl;

pub use batch::{batch_compress, batch_compress_with, output_file_name, RatioSummary};
pub use driver::compress_records;
pub use jsonl::{load_jsonl, save_jsonl};
