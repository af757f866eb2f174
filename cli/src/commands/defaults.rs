use anyhow::Result;
use project_simulator_core_rs::SimulationParameters;

pub fn print_defaults() -> Result<()> {
    println!("{}", SimulationParameters::default().to_json()?);
    Ok(())
}
