use crate::workflow::config::WorkflowConfig;
use anyhow::{bail, Context};
use wavecore::firmware::{QuantizedTable, TablePayload};
use wavecore::prelude::{StageInput, TableStage};
use wavecore::table::{QuantizeStage, ScaleStage, SpectrumStage};

pub struct WorkflowResult {
    pub table: QuantizedTable,
    pub peak: Option<f64>,
    pub dominant_bin: Option<usize>,
    pub spectrum_notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, payload: &TablePayload) -> anyhow::Result<WorkflowResult> {
        if payload.ancillary.steps != self.config.steps {
            bail!(
                "payload steps {} do not match workflow steps {}",
                payload.ancillary.steps,
                self.config.steps
            );
        }

        let stage_config = self.config.to_table_config(payload.ancillary.amplitude);
        let pool_size = stage_config.steps.max(1);

        let mut scale_stage = ScaleStage::new(pool_size);
        scale_stage
            .initialize(&stage_config)
            .context("initializing scale stage")?;
        let scale_output = scale_stage
            .execute(StageInput {
                samples: payload.samples.clone(),
            })
            .context("executing scale stage")?;
        scale_stage.cleanup();

        let mut quantize_stage = QuantizeStage::new(pool_size);
        quantize_stage
            .initialize(&stage_config)
            .context("initializing quantize stage")?;
        let quantize_output = quantize_stage
            .execute(StageInput {
                samples: scale_output.samples.clone(),
            })
            .context("executing quantize stage")?;
        quantize_stage.cleanup();

        let mut spectrum_stage = SpectrumStage::new(pool_size);
        spectrum_stage
            .initialize(&stage_config)
            .context("initializing spectrum stage")?;
        let spectrum_output = spectrum_stage
            .execute(StageInput {
                samples: quantize_output.samples.clone(),
            })
            .context("executing spectrum stage")?;
        spectrum_stage.cleanup();

        let table = quantize_output
            .metadata
            .table
            .clone()
            .context("quantize stage emitted no table")?;

        Ok(WorkflowResult {
            table,
            peak: scale_output.metadata.peak,
            dominant_bin: spectrum_output.metadata.dominant_bin,
            spectrum_notes: spectrum_output.metadata.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_table_payload;

    #[test]
    fn runner_builds_the_reference_table() {
        let cfg = WorkflowConfig::from_args(200, 400.0);
        let runner = Runner::new(cfg);
        let payload = build_table_payload(200, 400.0).unwrap();
        let result = runner.execute(&payload).unwrap();

        assert_eq!(result.table.len(), 200);
        assert_eq!(result.table.values[0], 0);
        assert!(result.table.values[100] >= 399);
        assert_eq!(result.table.values[199], 6);
        assert_eq!(result.dominant_bin, Some(0));
        assert!(!result.spectrum_notes.is_empty());
    }

    #[test]
    fn negated_amplitude_negates_every_sample() {
        let cfg = WorkflowConfig::from_args(200, 400.0);
        let runner = Runner::new(cfg);
        let forward = runner
            .execute(&build_table_payload(200, 400.0).unwrap())
            .unwrap();
        let inverted = runner
            .execute(&build_table_payload(200, -400.0).unwrap())
            .unwrap();

        for (a, b) in forward
            .table
            .values
            .iter()
            .zip(inverted.table.values.iter())
        {
            assert_eq!(*a, -*b);
        }
    }

    #[test]
    fn zero_steps_yields_an_empty_table() {
        let cfg = WorkflowConfig::from_args(0, 400.0);
        let runner = Runner::new(cfg);
        let payload = build_table_payload(0, 400.0).unwrap();
        let result = runner.execute(&payload).unwrap();

        assert!(result.table.is_empty());
        assert_eq!(format!("{}", result.table), "[]");
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let cfg = WorkflowConfig::from_args(200, 400.0);
        let runner = Runner::new(cfg);
        let payload = build_table_payload(100, 400.0).unwrap();
        assert!(runner.execute(&payload).is_err());
    }
}
