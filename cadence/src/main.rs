use anyhow::{Context, Result};
use cadence_core::cli::analyze::{AnalyzeArgs, render_summary, run_analysis};
use cadence_core::conf::AnalysisConfig;
use cadence_core::dump::to_pretty_json;
use cadence_core::logging::{LogFormat, default_log_format, init_logging};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cadence",
    version,
    about = "Per-client session timing statistics from a web server access log"
)]
struct Cli {
    #[command(flatten)]
    analyze: AnalyzeArgs,

    /// Print the resolved configuration as JSON before running
    #[arg(long)]
    show_config: bool,

    /// Do not print the run summary
    #[arg(long, short)]
    quiet: bool,

    /// Diagnostic log format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(cli) {
        eprintln!("{}", report(&e));
        std::process::exit(1);
    }
}

/// One-line diagnostic listing every cause, outermost first.
fn report(e: &anyhow::Error) -> String {
    format!("cadence: {e:#}")
}

fn run(cli: Cli) -> Result<()> {
    let cfg = AnalysisConfig::from(cli.analyze);

    if cli.show_config {
        println!("{}", to_pretty_json(&cfg)?);
    }

    let summary = run_analysis(&cfg).context("analysis failed")?;
    tracing::debug!(files = summary.files.len(), "analysis complete");

    if !cli.quiet {
        print!("{}", render_summary(&summary));
    }

    Ok(())
}
