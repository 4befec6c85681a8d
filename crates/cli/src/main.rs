//! Roomlay CLI: solve a room-layout document and report the result.

mod document;

use clap::Parser;
use document::{result_document, LayoutDocument};
use log::info;
use roomlay_core::{LayoutSolver, PlacementOutcome, ResultSet};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roomlay")]
#[command(about = "Places rectangular appliances inside a room polygon")]
#[command(version)]
struct Cli {
    /// Input layout document (JSON)
    input: PathBuf,

    /// Output file for the result document; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let doc = LayoutDocument::from_path(&cli.input)?;
    info!(
        "loaded '{}': {} boundary points, {} items",
        cli.input.display(),
        doc.boundary_len(),
        doc.item_count()
    );

    let (room, door, items) = doc.into_problem()?;
    let solver = LayoutSolver::new(room, door, items);
    let results = solver.solve();

    print_summary(&results);

    let json = serde_json::to_string_pretty(&result_document(&results))?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!("\nResults saved to: {}", path.display());
        }
        None => println!("\n{json}"),
    }

    Ok(())
}

fn print_summary(results: &ResultSet) {
    println!("Items: {}", results.len());
    println!("Placed: {}", results.placed_count());
    println!("Unplaced: {}", results.failed_count());
    for entry in results.iter() {
        match entry.outcome() {
            PlacementOutcome::Placed { x, y, rotation } => {
                println!(
                    "  {}: center ({:.2}, {:.2}), rotation {}",
                    entry.name(),
                    x,
                    y,
                    rotation
                );
            }
            PlacementOutcome::Failed { reason } => {
                println!("  {}: not placed - {}", entry.name(), reason);
            }
        }
    }
    println!(
        "Feasible: {}",
        if results.is_feasible() { "yes" } else { "no" }
    );
}
