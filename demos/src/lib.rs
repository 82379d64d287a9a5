//! qrows Tutorial Suite
//!
//! The circuits of a short course on quantum computing without circuit
//! diagrams, run on the local statevector simulator:
//!
//! - **Random bits**: H gates and measurement
//! - **Other distributions**: Bell pairs and a three-way split with RY
//! - **Digital operations**: a 3-bit increment built from X, CX and CCX
//! - **Grover's Search**: verify and amplify on three qubits
//!
//! ```
//! use qrows_adapter_sim::SimulatorBackend;
//! use qrows_demos::tutorials::Tutorial;
//!
//! let circuit = Tutorial::Increment.build()?;
//! let sv = SimulatorBackend::new().statevector(&circuit)?;
//! assert!((sv.probabilities()[4] - 1.0).abs() < 1e-12);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod tutorials;

use console::style;
use qrows_adapter_sim::{Counts, Statevector};

/// Amplitudes below this are printed as exact zeros.
const DISPLAY_EPS: f64 = 1e-12;

/// Format amplitudes as a bracketed list, dropping imaginary parts that are
/// all negligible.
pub fn format_amplitudes(sv: &Statevector) -> String {
    let clean = |x: f64| if x.abs() < DISPLAY_EPS { 0.0 } else { x };
    let items: Vec<String> = match sv.real_parts(DISPLAY_EPS) {
        Some(reals) => reals.into_iter().map(|re| format!("{:.4}", clean(re))).collect(),
        None => sv
            .amplitudes()
            .iter()
            .map(|amp| format!("{:.4}{:+.4}i", clean(amp.re), clean(amp.im)))
            .collect(),
    };
    format!("[{}]", items.join(", "))
}

/// Print a histogram of counts, one line per observed outcome.
pub fn print_histogram(counts: &Counts) {
    let total = counts.total().max(1) as f64;
    for (bitstring, count) in counts.bitstrings() {
        let prob = count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style("█".repeat(bar_len)).green()
        );
    }
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a statevector under a label.
pub fn print_state(label: &str, sv: &Statevector) {
    print_result(label, format_amplitudes(sv));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
