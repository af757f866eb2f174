use anyhow::{Context, Result};
use project_simulator_core_rs::{
    simulate_with_limits, EngineLimits, PartialParameters, SimulationParameters,
};
use std::fs;
use std::io::{self, Write};
use tracing::info;

use crate::args::{OutputFormat, RunArgs};
use crate::printing::{print_parameters, print_summary, print_table, write_csv, write_json};

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let params = resolve_parameters(args)?;
    let limits = EngineLimits {
        max_steps: args
            .max_steps
            .unwrap_or_else(|| EngineLimits::default().max_steps),
    };

    let result = simulate_with_limits(&params, &limits).context("Simulation rejected")?;
    info!(frames = result.len(), hash = result.parameters_hash(), "simulation complete");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => {
            print_parameters(&mut out, &params)?;
            print_table(&mut out, result.frames())?;
            print_summary(&mut out, &result.summary())?;
        }
        OutputFormat::Json => write_json(&mut out, &result)?,
        OutputFormat::Csv => write_csv(&mut out, result.frames())?,
    }
    out.flush()?;
    Ok(())
}

/// Defaults, then the config file, then individual flags
fn resolve_parameters(args: &RunArgs) -> Result<SimulationParameters> {
    let base = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SimulationParameters::from_json(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => SimulationParameters::default(),
    };

    let overrides = PartialParameters {
        initial_project_definition: args.initial_work,
        base_work_flow: args.work_flow,
        simulation_time: args.simulation_time,
        dt: args.dt,
    };
    Ok(overrides.resolve(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RunArgs {
        RunArgs {
            config: None,
            initial_work: None,
            work_flow: None,
            simulation_time: None,
            dt: None,
            max_steps: None,
            format: OutputFormat::Table,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let mut a = args();
        a.work_flow = Some(50.0);
        let params = resolve_parameters(&a).unwrap();
        assert_eq!(params.base_work_flow, 50.0);
        assert_eq!(params.initial_project_definition, 1000.0);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let mut a = args();
        a.config = Some("/nonexistent/params.json".into());
        let err = resolve_parameters(&a).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
