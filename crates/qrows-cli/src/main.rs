//! qrows Command-Line Interface
//!
//! The main entry point for the qrows CLI tool.
//!
//! ```text
//! qrows run --tutorial grover --shots 1000 --seed 7
//! qrows state --input circuit.json --format json
//! qrows tutorials
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Args, Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qrows_demos::tutorials::Tutorial;

mod commands;

use commands::common::OutputFormat;
use commands::{run, state, tutorials, version};

/// qrows - a small statevector simulator for learning quantum computing
#[derive(Parser)]
#[command(name = "qrows")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the circuit comes from: a built-in tutorial or a JSON file.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct CircuitSource {
    /// Built-in tutorial (uniform, bell, thirds, increment, grover)
    #[arg(short, long)]
    tutorial: Option<Tutorial>,

    /// Circuit file (JSON)
    #[arg(short, long)]
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a circuit and print the measurement histogram
    Run {
        #[command(flatten)]
        source: CircuitSource,

        /// Number of shots
        #[arg(short, long, default_value = "1000")]
        shots: u32,

        /// Seed for reproducible sampling
        #[arg(long, env = "QROWS_SEED")]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Simulator configuration file (YAML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the final statevector of a circuit
    State {
        #[command(flatten)]
        source: CircuitSource,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the built-in tutorials
    Tutorials,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            source,
            shots,
            seed,
            format,
            config,
        } => run::execute(
            source.tutorial,
            source.input.as_deref(),
            shots,
            seed,
            format,
            config.as_deref(),
        ),

        Commands::State { source, format } => {
            state::execute(source.tutorial, source.input.as_deref(), format)
        }

        Commands::Tutorials => {
            tutorials::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
