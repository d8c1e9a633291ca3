//! Command-line tool for route catalogue files.
//!
//! `waypoint-routes lint` validates a catalogue against the structural
//! invariants the matcher assumes; `waypoint-routes resolve` shows how a
//! concrete path resolves, including extracted parameters and the
//! breadcrumb trail.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use waypoint::linter::{lint_file, LintSeverity};
use waypoint::router::PatternTable;
use waypoint::{breadcrumbs, load_catalog, paths};

/// Inspect and validate Waypoint route catalogues.
#[derive(Parser)]
#[command(name = "waypoint-routes")]
#[command(about = "Waypoint route catalogue tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a route catalogue file
    Lint {
        /// Path to the catalogue file (YAML or JSON)
        catalog: PathBuf,
    },
    /// Resolve a concrete path against a catalogue
    Resolve {
        /// Path to the catalogue file (YAML or JSON)
        catalog: PathBuf,

        /// Concrete path to resolve, e.g. /jobs/42
        path: String,

        /// Prepend the synthetic Home entry to the breadcrumb trail
        #[arg(long, default_value_t = false)]
        home: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Lint { catalog } => {
            let issues = lint_file(&catalog)?;
            for issue in &issues {
                println!("[{}] {}: {}", issue.severity, issue.location, issue.message);
                if let Some(suggestion) = &issue.suggestion {
                    println!("    suggestion: {suggestion}");
                }
            }
            let errors = issues
                .iter()
                .filter(|i| i.severity == LintSeverity::Error)
                .count();
            println!(
                "{} issue(s), {} error(s) in {}",
                issues.len(),
                errors,
                catalog.display()
            );
            if errors > 0 {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve {
            catalog,
            path,
            home,
        } => {
            let catalog = load_catalog(&catalog)?;
            let table = PatternTable::new(&catalog);
            let path = paths::normalize(&path);

            match catalog.find_by_path(&path) {
                Some(route) => println!("exact match: {} ({})", route.name, route.title),
                None => println!("exact match: none"),
            }
            match table.resolve(&path) {
                Some((route, params)) => {
                    println!("pattern match: {} ({})", route.name, route.path);
                    for (key, value) in params.iter() {
                        println!("    {key} = {value}");
                    }
                }
                None => {
                    println!("pattern match: none");
                    println!("declared patterns: {}", table.pattern_strings().join(", "));
                }
            }

            let trail = breadcrumbs::generate(&catalog, &path, home);
            if trail.len() <= 1 {
                println!("breadcrumbs: (hidden, {} entries)", trail.len());
            } else {
                let rendered: Vec<String> = trail
                    .iter()
                    .map(|b| {
                        if b.is_active {
                            format!("[{}]", b.label)
                        } else {
                            b.label.clone()
                        }
                    })
                    .collect();
                println!("breadcrumbs: {}", rendered.join(" > "));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
