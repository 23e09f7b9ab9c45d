//! CLI for git-scout.
//!
//! Scans a directory tree for git repositories, probes each one's status
//! concurrently and renders the results as a table, with an optional CSV
//! export.

use clap::{CommandFactory, Parser};
use git_scout::{export_csv, render_table, Runner, RunnerConfig, ScanConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// git-scout - Scan a directory tree for git repositories and report their dirty/clean status.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan for git repositories.
    root: Option<PathBuf>,

    /// Enable debug output (traversal visits and skip decisions).
    #[arg(long)]
    debug: bool,

    /// Show only repositories with uncommitted changes.
    #[arg(long)]
    dirty_only: bool,

    /// Save results to a CSV file.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Path to a TOML scan configuration file.
    #[arg(long, env = "GIT_SCOUT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Absolute-path substring to exclude from traversal (repeatable).
    #[arg(long, value_name = "SUBSTRING")]
    exclude: Vec<String>,

    /// Maximum number of repositories probed at once.
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    // The root is required, but clap's own missing-argument error exits
    // with 2; this tool exits 1 with usage text instead.
    let Some(root) = args.root.clone() else {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        return ExitCode::from(1);
    };

    match run(args, root).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var; defaults to "debug"
///   when `--debug` is given and "info" otherwise
fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

/// Main execution logic.
async fn run(args: Args, root: PathBuf) -> anyhow::Result<()> {
    let mut scan_config = match &args.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    scan_config = scan_config.with_excludes(args.exclude.clone());
    if let Some(concurrency) = args.concurrency {
        scan_config = scan_config.with_concurrency(concurrency);
    }

    println!("Scanning for git repositories in: {}", root.display());
    if args.dirty_only {
        println!("Showing only repositories with uncommitted changes...");
    }
    if let Some(output) = &args.output {
        println!("Results will be saved to: {}", output.display());
    }
    println!("This may take a while depending on the size of the tree...");
    println!();

    let config = RunnerConfig::new(root)
        .with_scan_config(scan_config)
        .with_dirty_only(args.dirty_only);
    let outcome = Runner::new(config).run().await;

    if outcome.summary.found == 0 {
        println!("No git repositories found.");
        return Ok(());
    }

    println!("Found {} git repositories:\n", outcome.summary.found);

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    render_table(&outcome.statuses, &mut lock)?;
    lock.flush()?;

    // Export failure is reported but never fatal; the table and summary
    // were already produced.
    if let Some(output) = &args.output {
        match export_csv(&outcome.statuses, output) {
            Ok(()) => println!("Results saved to: {}", output.display()),
            Err(e) => eprintln!("Error saving to CSV: {e}"),
        }
    }

    println!("\n{}", outcome.summary.render());
    Ok(())
}
