use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How `run` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned frame table followed by summary metrics
    Table,
    /// Frames, summary and parameters as one JSON document
    Json,
    /// Frames only, one row per frame
    Csv,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON parameter file (camelCase keys, missing keys use defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total work required [initialProjectDefinition]
    #[arg(long)]
    pub initial_work: Option<f64>,

    /// Nominal work rate per unit time [baseWorkFlow]
    #[arg(long)]
    pub work_flow: Option<f64>,

    /// Simulation horizon [simulationTime]
    #[arg(long)]
    pub simulation_time: Option<f64>,

    /// Integration step [dt]
    #[arg(long)]
    pub dt: Option<f64>,

    /// Reject runs needing more loop iterations than this
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}
