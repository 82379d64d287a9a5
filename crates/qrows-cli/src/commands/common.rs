//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use serde::Serialize;
use tracing::info;

use qrows_adapter_sim::{ExecutionResult, SimulatorConfig, Statevector};
use qrows_demos::print_histogram;
use qrows_demos::tutorials::Tutorial;
use qrows_ir::Circuit;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// One statevector row in JSON output.
#[derive(Debug, Serialize)]
pub struct AmplitudeRow {
    pub row: usize,
    pub bitstring: String,
    pub re: f64,
    pub im: f64,
    pub probability: f64,
}

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    Circuit::from_json(&source).with_context(|| format!("Invalid circuit file: {path}"))
}

/// Build the tutorial or load the file, whichever was given.
pub fn resolve_circuit(tutorial: Option<Tutorial>, input: Option<&str>) -> Result<Circuit> {
    let circuit = match (tutorial, input) {
        (Some(tutorial), _) => tutorial
            .build()
            .with_context(|| format!("Failed to build tutorial {tutorial}"))?,
        (None, Some(path)) => load_circuit(path)?,
        (None, None) => anyhow::bail!("Either --tutorial or --input is required"),
    };

    info!(
        "Loaded {}: {} qubits, {} gates",
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_gates()
    );
    Ok(circuit)
}

/// Load a simulator configuration from a YAML file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<SimulatorConfig> {
    let Some(path) = path else {
        return Ok(SimulatorConfig::default());
    };

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {path}"))?;
    serde_yaml_ng::from_str(&source).with_context(|| format!("Invalid config file: {path}"))
}

/// Tabulate a statevector, one entry per row.
pub fn amplitude_rows(sv: &Statevector) -> Vec<AmplitudeRow> {
    sv.amplitudes()
        .iter()
        .enumerate()
        .map(|(row, amp)| AmplitudeRow {
            row,
            bitstring: sv.outcome_to_bitstring(row),
            re: amp.re,
            im: amp.im,
            probability: amp.norm_sqr(),
        })
        .collect()
}

/// Print execution results in a table format.
pub fn print_results(result: &ExecutionResult) {
    let qubits: Vec<String> = result
        .measured_qubits
        .iter()
        .rev()
        .map(ToString::to_string)
        .collect();

    println!(
        "\n{} Results ({} shots, bits {}):",
        style("✓").green().bold(),
        result.shots,
        qubits.join(" ")
    );

    print_histogram(&result.counts);

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}

/// Print a statevector in a table format.
pub fn print_statevector(sv: &Statevector) {
    println!(
        "\n{} Statevector ({} qubits):",
        style("✓").green().bold(),
        sv.num_qubits()
    );

    for entry in amplitude_rows(sv) {
        println!(
            "  {}: {:>8.4} {:+8.4}i  ({:>5.2}%)",
            style(entry.bitstring).cyan(),
            entry.re,
            entry.im,
            entry.probability * 100.0
        );
    }
}
