use serde::{Deserialize, Serialize};

/// Batch run configuration: where to read, where to write, which field to
/// compress, which model to compress with, and the target ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_path: String,
    pub output_dir: String,
    pub cot_field: String,
    pub model: String,
    pub ratios: Vec<f64>,
}

impl BatchConfig {
    pub fn new(input_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_cot_field(mut self, field: impl Into<String>) -> Self {
        self.cot_field = field.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_ratios(mut self, ratios: Vec<f64>) -> Self {
        self.ratios = ratios;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: "data/cot.jsonl".into(),
            output_dir: "compressed".into(),
            cot_field: "cot".into(),
            model: "token-budget".into(),
            ratios: vec![0.9, 0.7, 0.5],
        }
    }
}
