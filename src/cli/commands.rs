use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::IndexConfig;
use crate::indexer;
use crate::models::RunSummary;
use crate::utils::get_data_root;

#[derive(Parser)]
#[command(name = "catalog-indexer")]
#[command(version = "0.1.0")]
#[command(
    about = "Regenerate the aarti and varta index files from their content folders",
    long_about = None
)]
pub struct Cli {
    /// Data root holding `aartis/` and `varta/` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = get_data_root(cli.root.as_deref())?;
    let config = IndexConfig::for_root(&root);

    let summary = indexer::run(&config)?;
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("Index Generation Summary");
    println!("========================");
    for step in summary.steps() {
        match step {
            Some(index) => println!("  {}", index),
            None => println!("  (skipped: folder not found)"),
        }
    }
    println!();
    println!("All indexes updated successfully!");
}
