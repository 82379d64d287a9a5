//! Tutorials command implementation.

use console::style;

use qrows_demos::tutorials::Tutorial;

/// Execute the tutorials command.
pub fn execute() {
    println!("{}", style("Available tutorials:").bold());
    println!();
    for tutorial in Tutorial::ALL {
        println!(
            "  {:<10} {}",
            style(tutorial.name()).cyan(),
            tutorial.summary()
        );
    }
    println!();
    println!("Run one with: qrows run --tutorial <NAME>");
}
