use crate::firmware::QuantizedTable;
use crate::prelude::{
    StageError, StageInput, StageMetadata, StageOutput, StageResult, TableConfig, TableStage,
};
use crate::table::pool::BufferPool;
use crate::telemetry::log::LogManager;

/// Quantization stage that truncates scaled samples toward zero and emits
/// the finished drive table in its metadata.
pub struct QuantizeStage {
    pool: BufferPool,
    config: Option<TableConfig>,
    logger: LogManager,
}

impl QuantizeStage {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool: BufferPool::with_capacity(pool_size),
            config: None,
            logger: LogManager::for_stage("quantize"),
        }
    }
}

impl TableStage for QuantizeStage {
    fn initialize(&mut self, config: &TableConfig) -> StageResult<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;

        if input.samples.len() != config.steps {
            return Err(StageError::InvalidInput(format!(
                "expected {} samples, got {}",
                config.steps,
                input.samples.len()
            )));
        }

        let mut buffer = self.pool.checkout(input.samples.len())?;
        let mut values = Vec::with_capacity(input.samples.len());
        for (slot, &sample) in buffer.iter_mut().zip(input.samples.iter()) {
            // Saturating cast; truncation is toward zero.
            let value = sample as i64;
            *slot = value as f64;
            values.push(value);
        }

        let table = QuantizedTable::new(values, config.steps, config.amplitude);
        let entries = table.len();
        self.logger.record(&format!("{} entries", entries));

        let metadata = StageMetadata {
            table: Some(table),
            notes: vec![format!("quantized {} entries", entries)],
            ..Default::default()
        };

        Ok(StageOutput {
            samples: buffer,
            metadata,
        })
    }

    fn cleanup(&mut self) {
        self.pool.reset();
        self.config = None;
    }
}
