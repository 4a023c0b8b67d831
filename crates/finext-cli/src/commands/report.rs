//! Report command - assemble the document-level report from statement pages.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use finext_core::{FinancialReport, StatementKind};

use super::extract::extract_page;

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Standalone results page text file
    #[arg(long)]
    standalone: Option<PathBuf>,

    /// Consolidated results page text file
    #[arg(long)]
    consolidated: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ReportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if args.standalone.is_none() && args.consolidated.is_none() {
        anyhow::bail!("Provide at least one of --standalone or --consolidated");
    }

    let mut report = FinancialReport::new();

    for (kind, path) in [
        (StatementKind::Standalone, &args.standalone),
        (StatementKind::Consolidated, &args.consolidated),
    ] {
        let Some(path) = path else { continue };
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }

        info!("Processing {:?} page: {}", kind, path.display());
        let page = extract_page(path, &config)?;
        report.add_page(kind, &page);
    }

    let output = if config.output.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !report.metadata.unmatched_lines.is_empty() {
        eprintln!(
            "{} {} data lines matched no row label",
            style("ℹ").blue(),
            report.metadata.unmatched_lines.len()
        );
    }

    Ok(())
}
