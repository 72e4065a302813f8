//! CLI entry point for the brick mosaic build plan generator

use brickplan::io::cli::{Cli, PlanBuilder, summary_lines};
use clap::Parser;

// Allow print for the final artifact summary
#[allow(clippy::print_stdout)]
fn main() -> brickplan::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    let builder = PlanBuilder::from_cli(&cli)?;
    let outcome = builder.run()?;

    if !cli.quiet {
        println!("Generated files:");
        for artifact in &outcome.artifacts {
            println!("  {}: {}", artifact.kind, artifact.path.display());
        }
        for line in summary_lines(&outcome, builder.palette(), builder.config()) {
            println!("{line}");
        }
    }

    outcome.into_result().map(|_| ())
}
