//! Complete Tutorial Walkthrough
//!
//! Runs all four lessons in sequence, printing the statevector after each
//! step and a histogram for every measured circuit.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use qrows_adapter_sim::{SimulatorBackend, SimulatorConfig};
use qrows_demos::tutorials::{
    add_ccz, add_increment, add_prepare, add_reverse, add_verify, add_verify_with_h, bell, grover,
    thirds, uniform_random,
};
use qrows_demos::{
    print_header, print_histogram, print_info, print_result, print_section, print_state,
    print_success,
};
use qrows_ir::{Circuit, QubitId};

#[derive(Parser, Debug)]
#[command(name = "demo-all")]
#[command(about = "Run the complete tutorial walkthrough")]
struct Args {
    /// Shots per measured circuit
    #[arg(short, long, default_value = "1000")]
    shots: u32,

    /// Seed for reproducible histograms
    #[arg(long, env = "QROWS_SEED")]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();
    let backend = SimulatorBackend::from_config(SimulatorConfig {
        seed: args.seed,
        ..SimulatorConfig::default()
    });

    print_header("qrows Tutorial Walkthrough");

    println!("  1. A simple and useful quantum algorithm");
    println!("  2. Other random distributions");
    println!("  3. Digital operations");
    println!("  4. Solving a problem with Grover's search");
    println!();

    // =========================================================================
    // Part 1: Random bits
    // =========================================================================
    print_section("Part 1: A simple and useful quantum algorithm");

    let mut circuit = Circuit::with_size("simple", 2);
    print_state("Start", &backend.statevector(&circuit)?);
    circuit.h(QubitId(0))?;
    print_state("After H(0)", &backend.statevector(&circuit)?);
    circuit.h(QubitId(1))?;
    print_state("After H(1)", &backend.statevector(&circuit)?);

    let result = backend.run(&uniform_random(2)?, args.shots)?;
    print_histogram(&result.counts);
    print_success("Four outcomes, a quarter each");

    // =========================================================================
    // Part 2: Bell pair and thirds
    // =========================================================================
    print_section("Part 2: Other random distributions");

    print_info("Bell pair: H(0), CX(0, 1)");
    let result = backend.run(&bell()?, args.shots)?;
    print_histogram(&result.counts);

    print_info("Thirds: RY, H, RY, CX, RY");
    let circuit = thirds()?;
    print_state("State", &backend.statevector(&circuit)?);
    let result = backend.run(&circuit, args.shots)?;
    print_histogram(&result.counts);
    print_success("Three outcomes, a third each");

    // =========================================================================
    // Part 3: Increment
    // =========================================================================
    print_section("Part 3: Digital operations");

    let mut circuit = Circuit::with_size("increment", 3);
    circuit.x(QubitId(1))?;
    print_state("Start at |2⟩", &backend.statevector(&circuit)?);
    add_increment(&mut circuit)?;
    print_state("After increment", &backend.statevector(&circuit)?);
    add_increment(&mut circuit)?;
    print_state("After increment", &backend.statevector(&circuit)?);

    let mut circuit = Circuit::with_size("increment", 3);
    circuit.h(QubitId(2))?;
    print_state("Start at |0⟩ + |4⟩", &backend.statevector(&circuit)?);
    add_increment(&mut circuit)?;
    print_state("After increment", &backend.statevector(&circuit)?);
    print_success("Both numbers incremented at once");

    // =========================================================================
    // Part 4: Grover's search
    // =========================================================================
    print_section("Part 4: Solving a problem with Grover's search");

    let mut circuit = Circuit::with_size("toffoli", 3);
    circuit.x(QubitId(0))?.x(QubitId(1))?;
    print_state("Start at |3⟩", &backend.statevector(&circuit)?);
    circuit.ccx(QubitId(0), QubitId(1), QubitId(2))?;
    print_state("After CCX(0, 1, 2)", &backend.statevector(&circuit)?);

    let mut circuit = Circuit::with_size("verify", 3);
    circuit.x(QubitId(0))?;
    add_verify(&mut circuit)?;
    print_state("Verify |01⟩", &backend.statevector(&circuit)?);

    let mut circuit = Circuit::with_size("grover-steps", 3);
    add_prepare(&mut circuit)?;
    add_verify_with_h(&mut circuit)?;
    print_state("Prepare, verify with H", &backend.statevector(&circuit)?);
    add_prepare(&mut circuit)?;
    print_state("Prepare again", &backend.statevector(&circuit)?);
    add_reverse(&mut circuit)?;
    print_state("Reverse", &backend.statevector(&circuit)?);
    add_ccz(&mut circuit)?;
    add_reverse(&mut circuit)?;
    print_state("After CCZ, reverse again", &backend.statevector(&circuit)?);
    add_prepare(&mut circuit)?;
    print_state("Prepare again (amplified)", &backend.statevector(&circuit)?);

    let result = backend.run(&grover()?, args.shots)?;
    print_histogram(&result.counts);
    match result.counts.most_frequent() {
        Some((0b01, count)) => {
            print_result("Most frequent", format!("01 ({count} of {})", args.shots));
            print_success("Found the answer 01");
        }
        Some((outcome, count)) => print_info(&format!(
            "Most frequent was {} ({count} of {}), not the answer 01",
            result.counts.bitstring(outcome),
            args.shots
        )),
        None => print_info("No shots were taken"),
    }

    println!();
    print_result("Total time", format!("{:.2?}", start.elapsed()));
    Ok(())
}
