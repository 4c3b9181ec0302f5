/*!
 * MLFQ Simulator - Main Entry Point
 *
 * Interactive front end:
 * - Reads the workload from the operator (or uses the default table)
 * - Runs the simulation
 * - Prints the final results table or a JSON report
 */

use miette::IntoDiagnostic;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use mlfq_sim::core::limits::MAX_PROCESSES;
use mlfq_sim::process::workload::count_in_range;
use mlfq_sim::{
    default_workload, init_tracing, resolve_workload, MenuChoice, ProcessSpec, SimConfig,
    Simulation, SimulationReport,
};

/// Environment variable selecting the result format (`table` or `json`)
const OUTPUT_ENV: &str = "MLFQ_OUTPUT";

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimConfig::from_env()?;
    info!(quantum = config.quantum, unit_delay = ?config.unit_delay, "Configuration loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let specs = read_workload(&mut input).into_diagnostic()?;

    println!("\nStarting MLFQ Scheduler with {} processes:", specs.len());
    println!("Process\tTotal Time");
    for spec in &specs {
        println!("{}\t{}", spec.id, spec.total_time);
    }

    let report = Simulation::new(specs).with_config(config).run()?;

    let json = std::env::var(OUTPUT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        print_results(&report);
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended while waiting for an answer",
        ));
    }
    Ok(line.trim().to_string())
}

fn read_workload(input: &mut impl BufRead) -> io::Result<Vec<ProcessSpec>> {
    println!("MLFQ Scheduler");
    println!("1. Use default processes (A=300, B=150, C=250, D=350, E=450)");
    println!("2. Enter custom processes");

    let choice = MenuChoice::parse(&prompt(input, "Enter your choice: ")?);
    if choice == MenuChoice::Default {
        return Ok(default_workload());
    }

    let raw = prompt(
        input,
        &format!("Enter number of processes (1-{}): ", MAX_PROCESSES),
    )?;
    let count = raw.parse::<i64>().unwrap_or(0);
    let entries = if count_in_range(count) {
        read_entries(input, count as usize)?
    } else {
        Vec::new()
    };

    Ok(resolve_workload(count, entries))
}

fn read_entries(input: &mut impl BufRead, count: usize) -> io::Result<Vec<ProcessSpec>> {
    let mut entries: Vec<ProcessSpec> = Vec::with_capacity(count);

    while entries.len() < count {
        println!("Enter details for process {}:", entries.len() + 1);

        let name = prompt(input, "Name of the process (single character): ")?;
        let mut chars = name.chars();
        let id = match (chars.next(), chars.next()) {
            (Some(id), None) if !entries.iter().any(|e| e.id == id) => id,
            _ => {
                warn!(name = %name, "Process name must be a new single character");
                continue;
            }
        };

        let total = prompt(input, "Total CPU time needed: ")?;
        match total.parse::<u64>() {
            Ok(total_time) if total_time > 0 => entries.push(ProcessSpec::new(id, total_time)),
            _ => warn!(value = %total, "Total CPU time must be a positive integer"),
        }
    }

    Ok(entries)
}

fn print_results(report: &SimulationReport) {
    println!("\n======= Final Results =======");
    println!("Process\tTotal Time\tTurnaround Time");
    for outcome in report.outcomes() {
        println!(
            "{}\t{}\t\t{}",
            outcome.id, outcome.total_time, outcome.turnaround_time
        );
    }
    println!("\nAverage Turnaround Time: {:.2}", report.mean_turnaround());
}
