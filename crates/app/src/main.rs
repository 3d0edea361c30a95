use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tally_import::ImportOptions;
use tally_report::ReportConfig;

mod render;

/// Categorize a bank CSV export and report spending by category, top
/// vendors, monthly trends, and overspending alerts.
#[derive(Parser)]
#[command(name = "tally", version)]
struct Cli {
    /// CSV file with Date, Description and Amount columns.
    file: PathBuf,

    /// Month-over-month increase that triggers an alert (fraction, strict).
    #[arg(long, default_value = "0.20")]
    threshold: Decimal,

    /// Number of vendors in the top-vendor table.
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Exact chrono format for the Date column, e.g. "%d/%m/%Y".
    #[arg(long)]
    date_format: Option<String>,

    /// Print the full report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let file = File::open(&cli.file)
        .with_context(|| format!("opening {}", cli.file.display()))?;

    let config = ReportConfig {
        threshold: cli.threshold,
        top_vendors: cli.top,
        import: ImportOptions {
            date_format: cli.date_format.clone(),
        },
    };

    let report = tally_report::run(file, &config)
        .with_context(|| format!("importing {}", cli.file.display()))?;
    tracing::info!(
        categories = report.by_category.len(),
        dropped_rows = report.dropped_rows,
        alerts = report.overspending.alerts().len(),
        "report computed"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report, &config);
    }
    Ok(())
}
