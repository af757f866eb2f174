use project_simulator_core_rs::{Frame, RunSummary, SimulationParameters, SimulationResult};
use std::io::{self, Write};

pub fn print_parameters<W: Write>(out: &mut W, params: &SimulationParameters) -> io::Result<()> {
    writeln!(out, "\n📋 Model Parameters")?;
    writeln!(
        out,
        "  • Initial Project Definition: {} drawings [--initial-work]",
        params.initial_project_definition
    )?;
    writeln!(
        out,
        "  • Base Work Flow: {} drawings/month [--work-flow]",
        params.base_work_flow
    )?;
    writeln!(
        out,
        "  • Simulation Time: {} months [--simulation-time]",
        params.simulation_time
    )?;
    writeln!(out, "  • Time Step: {} months [--dt]", params.dt)?;
    Ok(())
}

pub fn print_table<W: Write>(out: &mut W, frames: &[Frame]) -> io::Result<()> {
    writeln!(out, "\n📈 Frames")?;
    writeln!(
        out,
        "{:>10} {:>18} {:>16} {:>12} {:>6}",
        "time", "workAccomplished", "workRemaining", "workFlow", "done"
    )?;
    for f in frames {
        writeln!(
            out,
            "{:>10.2} {:>18.2} {:>16.2} {:>12.2} {:>6}",
            f.time,
            f.work_accomplished,
            f.work_remaining,
            f.work_flow,
            f.done_flag()
        )?;
    }
    Ok(())
}

pub fn print_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out, "\n📊 Results")?;
    writeln!(out, "  • Completion Time: {}", format_completion_time(summary))?;
    writeln!(
        out,
        "  • Final Work Accomplished: {:.0}",
        summary.final_work_accomplished
    )?;
    writeln!(out, "  • Work Remaining: {:.0}", summary.final_work_remaining)?;
    let marker = if summary.is_complete() { "✅" } else { "🔄" };
    writeln!(out, "  • Project Status: {} {}", marker, summary.status)?;
    Ok(())
}

/// One decimal, or "Not completed"
pub fn format_completion_time(summary: &RunSummary) -> String {
    match summary.completion_time {
        Some(t) => format!("{t:.1}"),
        None => "Not completed".to_string(),
    }
}

pub fn write_csv<W: Write>(out: &mut W, frames: &[Frame]) -> io::Result<()> {
    writeln!(
        out,
        "time,workAccomplished,workRemaining,workFlow,projectIsDone"
    )?;
    for f in frames {
        writeln!(
            out,
            "{},{},{},{},{}",
            f.time,
            f.work_accomplished,
            f.work_remaining,
            f.work_flow,
            f.done_flag()
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    let document = serde_json::json!({
        "parameters": result.parameters(),
        "parametersHash": result.parameters_hash(),
        "summary": result.summary(),
        "frames": result.frames(),
    });
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}
