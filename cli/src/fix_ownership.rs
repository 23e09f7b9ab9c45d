//! Companion tool: finds git repositories rejected by the
//! `safe.directory` ownership check and registers them as trusted.

use clap::{CommandFactory, Parser};
use git_scout::{fix_ownership, FixOutcome, PathFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// git-scout-fix-ownership - Register ownership-rejected repositories under safe.directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan for git repositories.
    root: Option<PathBuf>,

    /// Enable debug output (traversal visits and skip decisions).
    #[arg(long)]
    debug: bool,

    /// Absolute-path substring to exclude from traversal (repeatable).
    #[arg(long, value_name = "SUBSTRING")]
    exclude: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let Some(root) = args.root else {
        let mut cmd = Args::command();
        let _ = cmd.print_help();
        return ExitCode::from(1);
    };

    println!("Scanning for git repositories in: {}", root.display());
    println!("This will automatically fix ownership issues...");
    println!();

    let filter = PathFilter::new(args.exclude);
    let report = fix_ownership(&root, &filter).await;

    if report.results.is_empty() {
        println!("No git repositories found.");
        return ExitCode::SUCCESS;
    }

    println!(
        "Found {} git repositories. Checked for ownership issues.\n",
        report.results.len()
    );

    for result in &report.results {
        match &result.outcome {
            FixOutcome::Fixed => println!("Fixed: {}", result.path.display()),
            FixOutcome::Failed { error } => {
                println!("Failed to fix {}: {error}", result.path.display());
            }
            FixOutcome::NoIssue => {}
        }
    }

    println!("\nFixed ownership for {} repositories.", report.fixed_count());
    ExitCode::SUCCESS
}
