use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wavecore::prelude::TableConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub steps: usize,
    pub amplitude: f64,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(steps: usize, amplitude: f64) -> Self {
        Self { steps, amplitude }
    }

    /// Stage configuration for one pass; the signed amplitude rides the
    /// payload ancillary rather than the workflow file.
    pub fn to_table_config(&self, amplitude: f64) -> TableConfig {
        TableConfig {
            steps: self.steps,
            amplitude,
        }
    }
}
