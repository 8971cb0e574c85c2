use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use wavecore::firmware::{TableAncillary, TablePayload};
use wavecore::table::half_period_samples;

/// Configuration for generating one table payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub steps: usize,
    pub amplitude: f64,
    pub dither: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            amplitude: 400.0,
            dither: 0.0,
            seed: 0,
        }
    }
}

fn build_sample_vector(config: &GeneratorConfig) -> anyhow::Result<Vec<f64>> {
    anyhow::ensure!(
        config.dither >= 0.0,
        "dither must be non-negative, got {}",
        config.dither
    );

    let mut samples = half_period_samples(config.steps);
    if config.dither > 0.0 {
        let mut rng = StdRng::seed_from_u64(config.seed);
        for sample in samples.iter_mut() {
            *sample += rng.gen_range(-config.dither..config.dither);
        }
    }

    Ok(samples)
}

pub fn build_table_payload_from_config(config: &GeneratorConfig) -> anyhow::Result<TablePayload> {
    let samples = build_sample_vector(config)?;
    let ancillary = TableAncillary {
        steps: config.steps,
        amplitude: config.amplitude,
        dither: config.dither,
    };

    Ok(TablePayload::new(samples, ancillary))
}

pub fn build_table_payload(steps: usize, amplitude: f64) -> anyhow::Result<TablePayload> {
    let config = GeneratorConfig {
        steps,
        amplitude,
        ..Default::default()
    };
    build_table_payload_from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_sample_count() {
        let payload = build_table_payload(200, 400.0).unwrap();
        assert_eq!(payload.samples.len(), 200);
        assert_eq!(payload.samples[0], 0.0);
        assert_eq!(payload.ancillary.amplitude, 400.0);
        assert_eq!(payload.ancillary.dither, 0.0);
    }

    #[test]
    fn zero_steps_builds_empty_payload() {
        let payload = build_table_payload(0, 400.0).unwrap();
        assert!(payload.samples.is_empty());
        assert_eq!(payload.ancillary.steps, 0);
    }

    #[test]
    fn seeded_dither_is_reproducible() {
        let config = GeneratorConfig {
            steps: 64,
            amplitude: 400.0,
            dither: 0.01,
            seed: 13,
        };

        let first = build_table_payload_from_config(&config).unwrap();
        let second = build_table_payload_from_config(&config).unwrap();
        assert_eq!(first.samples, second.samples);

        let clean = build_table_payload(64, 400.0).unwrap();
        assert_ne!(first.samples, clean.samples);
    }

    #[test]
    fn negative_dither_is_rejected() {
        let config = GeneratorConfig {
            dither: -0.5,
            ..Default::default()
        };
        assert!(build_table_payload_from_config(&config).is_err());
    }
}
