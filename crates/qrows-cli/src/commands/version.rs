//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - statevector simulation for learning quantum computing",
        style("qrows").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qrows-ir           Circuit builder and instruction set");
    println!("  qrows-adapter-sim  Statevector engine and sampler");
    println!("  qrows-demos        Tutorial circuits");
    println!("  qrows-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qrows/qrows").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
