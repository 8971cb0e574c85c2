use crate::math::spectrum::SpectrumAnalyzer;
use crate::prelude::{
    StageError, StageInput, StageMetadata, StageOutput, StageResult, TableConfig, TableStage,
};
use crate::table::pool::BufferPool;
use crate::telemetry::log::LogManager;

/// Diagnostic stage reporting where a finished table's energy sits.
///
/// A half-period sine table is single-signed, so its mean dominates and the
/// reported bin is 0. The samples pass through untouched.
pub struct SpectrumStage {
    pool: BufferPool,
    analyzer: Option<SpectrumAnalyzer>,
    logger: LogManager,
}

impl SpectrumStage {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool: BufferPool::with_capacity(pool_size),
            analyzer: None,
            logger: LogManager::for_stage("spectrum"),
        }
    }
}

impl TableStage for SpectrumStage {
    fn initialize(&mut self, config: &TableConfig) -> StageResult<()> {
        self.analyzer = Some(SpectrumAnalyzer::new(config.steps.max(1)));
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        let analyzer = self
            .analyzer
            .as_ref()
            .ok_or_else(|| StageError::Internal("analyzer not configured".into()))?;

        let mut buffer = self.pool.checkout(input.samples.len())?;
        buffer.copy_from_slice(&input.samples);

        let metadata = if buffer.is_empty() {
            StageMetadata {
                notes: vec!["empty table, spectrum skipped".to_string()],
                ..Default::default()
            }
        } else {
            let magnitudes = analyzer.magnitudes(&buffer);
            match SpectrumAnalyzer::dominant_bin(&magnitudes) {
                Some((bin, magnitude)) => {
                    self.logger
                        .record(&format!("dominant bin {} magnitude {:.1}", bin, magnitude));
                    StageMetadata {
                        dominant_bin: Some(bin),
                        notes: vec![format!("dominant bin {} magnitude {:.1}", bin, magnitude)],
                        ..Default::default()
                    }
                }
                None => StageMetadata {
                    notes: vec!["empty spectrum".to_string()],
                    ..Default::default()
                },
            }
        };

        Ok(StageOutput {
            samples: buffer,
            metadata,
        })
    }

    fn cleanup(&mut self) {
        self.pool.reset();
        self.analyzer = None;
    }
}
