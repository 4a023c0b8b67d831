//! Extract command - financial data from a single page text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use finext_core::statement::rules::clean_ocr_text;
use finext_core::{FinancialData, PageExtraction, PageParser, StatementParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input page text file (OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List data lines that matched no row label
    #[arg(long)]
    show_unmatched: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (label, period, value rows)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing page: {}", args.input.display());

    let page = extract_page(&args.input, &config)?;

    debug!(
        "{} values across {} periods in {}ms",
        page.data.value_count(),
        page.data.len(),
        page.processing_time_ms
    );

    // Format output
    let output = match args.format {
        OutputFormat::Json => {
            if config.output.pretty {
                serde_json::to_string_pretty(&page.data)?
            } else {
                serde_json::to_string(&page.data)?
            }
        }
        OutputFormat::Csv => format_csv(&page.data)?,
        OutputFormat::Text => format_text(&page),
    };

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_unmatched && !page.unmatched_lines.is_empty() {
        eprintln!("{}", style("Unmatched data lines:").yellow());
        for line in &page.unmatched_lines {
            eprintln!("  - {}", line);
        }
    }

    Ok(())
}

/// Read, scrub and parse one page text file.
pub fn extract_page(
    path: &PathBuf,
    config: &finext_core::FinextConfig,
) -> anyhow::Result<PageExtraction> {
    let raw = fs::read_to_string(path)?;
    let text = clean_ocr_text(&raw);

    let parser = StatementParser::from_config(&config.extraction);
    Ok(parser.parse_page(&text))
}

pub fn format_csv(data: &FinancialData) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["label", "period", "value"])?;

    for (period, rows) in data.iter() {
        for (label, value) in rows {
            wtr.write_record([label.as_str(), period, &value.to_string()])?;
        }
    }

    let out = String::from_utf8(wtr.into_inner()?)?;
    Ok(out)
}

fn format_text(page: &PageExtraction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Periods: {}\n", page.periods.len()));
    for (period, rows) in page.data.iter() {
        output.push_str(&format!("\n{}\n", period));
        for (label, value) in rows {
            output.push_str(&format!("  {}: {}\n", label, value));
        }
    }

    if page.data.is_empty() {
        output.push_str("\nNo rows extracted.\n");
    }

    output
}
