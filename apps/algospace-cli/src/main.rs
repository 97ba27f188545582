use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use algospace_exercises::load_builtin;
use algospace_harness::{Command as WorldCommand, Runner, Script, WorldInspector};

#[derive(Parser)]
#[command(name = "algospace-cli", about = "CLI tool for the algospace exercise catalog")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and catalog size
    Info,
    /// List the built-in exercise catalog
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the world variants of one exercise
    Show {
        /// Exercise id (e.g. "AlgShellSort")
        id: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run a generated sorting script against the shell sort exercise
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let catalog = load_builtin();

    match cli.command {
        Commands::Info => {
            println!("algospace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("built-in exercises: {}", catalog.len());
        }
        Commands::List { json } => {
            if json {
                let entries: Vec<serde_json::Value> = catalog
                    .iter()
                    .map(|ex| {
                        serde_json::json!({
                            "id": ex.id(),
                            "display_label": ex.display_label(),
                            "tab_label": ex.tab_label(),
                            "variants": ex.variant_count(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for ex in catalog.iter() {
                    println!(
                        "{} (tab: {}) - {} variant(s)",
                        ex.id(),
                        ex.tab_label(),
                        ex.variant_count()
                    );
                }
            }
        }
        Commands::Show { id, json } => {
            let exercise = catalog
                .get(&id)
                .with_context(|| format!("no exercise with id {id:?}"))?;
            let summaries: Vec<_> = exercise.worlds().iter().map(WorldInspector::summary).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!("{} ({})", exercise.id(), exercise.display_label());
                for summary in &summaries {
                    println!("  {summary}");
                }
            }
        }
        Commands::Demo => {
            let exercise = catalog
                .get("AlgShellSort")
                .context("built-in shell sort exercise missing")?;

            // Record the command script an engine running a selection sort
            // over the functional tier would emit.
            let functional = exercise.worlds()[0]
                .as_sequence()
                .context("first variant is not a sequence world")?;
            let mut values = functional.values().to_vec();
            let mut script = Script::default();
            for i in 0..values.len() {
                let mut min = i;
                for j in (i + 1)..values.len() {
                    script.push(WorldCommand::Compare { i: j, j: min });
                    if values[j] < values[min] {
                        min = j;
                    }
                }
                if min != i {
                    values.swap(i, min);
                    script.push(WorldCommand::Swap { i, j: min });
                }
            }

            println!("Running {} commands against {}", script.len(), exercise.id());
            let result = Runner::run_exercise(exercise, &script)?;
            for run in &result.runs {
                println!("  {}", WorldInspector::summary(&run.world));
            }
            if result.skipped > 0 {
                println!("  ({} variant(s) skipped)", result.skipped);
            }
            println!(
                "Exercise {}: {}",
                result.exercise_id,
                if result.passed { "PASSED" } else { "FAILED" }
            );
        }
    }

    Ok(())
}
