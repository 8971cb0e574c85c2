use anyhow::Context;
use clap::Parser;
use generator::profile::{build_table_payload_from_config, GeneratorConfig};
use log::info;
use std::path::PathBuf;
use wavecore::firmware::TablePayload;
use wavecore::telemetry::MetricsRecorder;
use workflow::config::WorkflowConfig;
use workflow::runner::{Runner, WorkflowResult};

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Waveform drive-table workflow driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 200)]
    steps: usize,
    #[arg(long, default_value_t = 400.0, allow_negative_numbers = true)]
    amplitude: f64,
    /// Uniform jitter applied to the raw samples before scaling
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dither: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.steps, args.amplitude)
    };

    let runner = Runner::new(workflow_config.clone());
    let metrics = MetricsRecorder::default();

    let forward_profile = GeneratorConfig {
        steps: workflow_config.steps,
        amplitude: workflow_config.amplitude,
        dither: args.dither,
        seed: args.seed,
    };
    let payload =
        build_table_payload_from_config(&forward_profile).context("building forward payload")?;
    let result = execute_pass(&runner, &metrics, &payload).context("running forward pass")?;
    info!(
        "forward pass -> entries {}, peak {:?}, dominant bin {:?}, notes {:?}",
        result.table.len(),
        result.peak,
        result.dominant_bin,
        result.spectrum_notes
    );

    // The firmware consumes the inverted drive table; only that one is printed.
    let inverted_profile = GeneratorConfig {
        amplitude: -workflow_config.amplitude,
        ..forward_profile
    };
    let payload =
        build_table_payload_from_config(&inverted_profile).context("building inverted payload")?;
    let result = execute_pass(&runner, &metrics, &payload).context("running inverted pass")?;

    println!("{}", result.table);

    let snapshot = metrics.snapshot();
    info!(
        "workflow complete -> tables {}, samples {}, errors {}",
        snapshot.tables_built, snapshot.samples_emitted, snapshot.errors
    );

    Ok(())
}

fn execute_pass(
    runner: &Runner,
    metrics: &MetricsRecorder,
    payload: &TablePayload,
) -> anyhow::Result<WorkflowResult> {
    match runner.execute(payload) {
        Ok(outcome) => {
            metrics.record_table(outcome.table.len());
            Ok(outcome)
        }
        Err(error) => {
            metrics.record_error();
            Err(error)
        }
    }
}
