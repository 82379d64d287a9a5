//! State command implementation.

use anyhow::{Context, Result};

use qrows_adapter_sim::SimulatorBackend;
use qrows_demos::tutorials::Tutorial;

use super::common::{OutputFormat, amplitude_rows, print_statevector, resolve_circuit};

/// Execute the state command.
pub fn execute(tutorial: Option<Tutorial>, input: Option<&str>, format: OutputFormat) -> Result<()> {
    let circuit = resolve_circuit(tutorial, input)?;
    let sv = SimulatorBackend::new()
        .statevector(&circuit)
        .with_context(|| format!("Simulation of {} failed", circuit.name()))?;

    match format {
        OutputFormat::Table => print_statevector(&sv),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&amplitude_rows(&sv))?);
        }
    }

    Ok(())
}
