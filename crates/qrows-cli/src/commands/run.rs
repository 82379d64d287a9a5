//! Run command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use qrows_adapter_sim::SimulatorBackend;
use qrows_demos::tutorials::Tutorial;

use super::common::{OutputFormat, load_config, print_results, resolve_circuit};

/// Execute the run command.
pub fn execute(
    tutorial: Option<Tutorial>,
    input: Option<&str>,
    shots: u32,
    seed: Option<u64>,
    format: OutputFormat,
    config: Option<&str>,
) -> Result<()> {
    let mut sim_config = load_config(config)?;
    if seed.is_some() {
        sim_config.seed = seed;
    }
    info!("Simulator config: {:?}", sim_config);

    let circuit = resolve_circuit(tutorial, input)?;
    let backend = SimulatorBackend::from_config(sim_config);

    if format == OutputFormat::Table {
        println!(
            "{} Running {} on the local simulator ({} shots)",
            style("→").cyan().bold(),
            style(circuit.name()).green(),
            shots
        );
        println!(
            "  Loaded: {} qubits, {} gates",
            circuit.num_qubits(),
            circuit.num_gates()
        );
    }

    let result = backend
        .run(&circuit, shots)
        .with_context(|| format!("Simulation of {} failed", circuit.name()))?;

    match format {
        OutputFormat::Table => print_results(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
