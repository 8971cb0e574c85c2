use serde::{Deserialize, Serialize};

/// Ancillary metadata describing how a sample vector was generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAncillary {
    pub steps: usize,
    pub amplitude: f64,
    pub dither: f64,
}

/// Unit sample vector handed from the generator to the workflow runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    pub samples: Vec<f64>,
    pub ancillary: TableAncillary,
}

impl TablePayload {
    pub fn new(samples: Vec<f64>, ancillary: TableAncillary) -> Self {
        Self { samples, ancillary }
    }
}
