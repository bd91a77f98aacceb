mod charts;
mod error;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::Path;

use clap::Parser;

use crate::error::ReportError;
use crate::pipeline::stage4_report::report_timestamp;
use crate::pipeline::stage5_launch::{LaunchOutcome, open_report, print_completion};
use crate::pipeline::{OUTPUT_DIR, run_pipeline};

/// Render evaluation-criteria charts and an HTML summary into ./evaluation_reports.
#[derive(Debug, Parser)]
#[command(name = "evalsummary", version, about)]
struct Cli {
    /// Write the report without opening it in a browser.
    #[arg(long)]
    no_open: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ReportError> {
    let out_dir = Path::new(OUTPUT_DIR);
    let generated_at = report_timestamp();

    let artifacts = run_pipeline(out_dir, generated_at)?;
    tracing::info!(
        report = %artifacts.html_path.display(),
        summary = %artifacts.summary_path.display(),
        "run complete"
    );

    let outcome = if cli.no_open {
        LaunchOutcome::Skipped
    } else {
        open_report(&artifacts.html_path)
    };
    print_completion(out_dir, &artifacts.html_path, &outcome);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
