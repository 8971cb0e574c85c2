use crate::math::stats::Stats;
use crate::prelude::{
    StageError, StageInput, StageMetadata, StageOutput, StageResult, TableConfig, TableStage,
};
use crate::table::pool::BufferPool;
use crate::telemetry::log::LogManager;

/// Scaling stage that applies the configured amplitude to unit samples.
///
/// A negative amplitude negates every sample; no branching is involved
/// beyond the multiplication.
pub struct ScaleStage {
    pool: BufferPool,
    config: Option<TableConfig>,
    logger: LogManager,
}

impl ScaleStage {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool: BufferPool::with_capacity(pool_size),
            config: None,
            logger: LogManager::for_stage("scale"),
        }
    }
}

impl TableStage for ScaleStage {
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
        for (slot, &sample) in buffer.iter_mut().zip(input.samples.iter()) {
            *slot = sample * config.amplitude;
        }

        let peak = Stats::peak(&buffer);
        self.logger.record(&format!("peak {:.4}", peak));

        let metadata = StageMetadata {
            peak: Some(peak),
            notes: vec![format!("scale peak {:.4}", peak)],
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
