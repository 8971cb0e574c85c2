use serde::{Deserialize, Serialize};

use crate::firmware::QuantizedTable;

/// Per-pass configuration shared by the table stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub steps: usize,
    pub amplitude: f64,
}

/// Sample vector handed into a stage.
#[derive(Debug, Clone)]
pub struct StageInput {
    pub samples: Vec<f64>,
}

/// Output produced by each stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub samples: Vec<f64>,
    pub metadata: StageMetadata,
}

/// Metadata used for chaining stages and telemetry.
#[derive(Debug, Clone, Default)]
pub struct StageMetadata {
    pub peak: Option<f64>,
    pub table: Option<QuantizedTable>,
    pub dominant_bin: Option<usize>,
    pub notes: Vec<String>,
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    #[error("buffer exhaustion: {0}")]
    BufferExhaustion(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StageResult<T> = Result<T, StageError>;

/// Trait describing the table-processing stages.
pub trait TableStage {
    fn initialize(&mut self, config: &TableConfig) -> StageResult<()>;
    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput>;
    fn cleanup(&mut self);
}
