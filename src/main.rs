//! LactateLab - Lactate Threshold Analysis Toolkit
//!
//! Command-line entry point: reads a CSV test table, runs the threshold
//! analysis and prints a summary or JSON record.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lactatelab::analysis::{ThresholdAnalyzer, ThresholdPolicy, ThresholdResult, MIN_STAGES};
use lactatelab::config;
use lactatelab::import::parse_table_file;
use lactatelab::report;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lactate threshold analysis from incremental test tables",
    long_about = None
)]
struct Cli {
    /// CSV table with Lactate, Heart Rate and Power columns
    input: PathBuf,

    /// Threshold policy: baseline_delta, range_band_conservative or
    /// range_band_simple (defaults to the configured policy)
    #[arg(short, long)]
    policy: Option<ThresholdPolicy>,

    /// Previous test table to analyze alongside the input
    #[arg(long)]
    compare: Option<PathBuf>,

    /// Emit results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Re-export the parsed table as normalized CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        config::AppConfig::default()
    });

    let policy = cli.policy.unwrap_or(config.default_policy);
    let analyzer = ThresholdAnalyzer::new(policy);

    let series = parse_table_file(&cli.input)
        .with_context(|| format!("Failed to read test table {}", cli.input.display()))?;
    tracing::info!("Loaded {} stages from {}", series.len(), cli.input.display());
    let result = analyzer.analyze(&series);

    // Old-vs-new comparison is two independent series and two analyze
    // calls; nothing is shared between them.
    let previous = match &cli.compare {
        Some(path) => {
            let old_series = parse_table_file(path)
                .with_context(|| format!("Failed to read test table {}", path.display()))?;
            Some((path.clone(), analyzer.analyze(&old_series)))
        }
        None => None,
    };

    if cli.json {
        let payload = match &previous {
            Some((_, old_result)) => serde_json::json!({
                "current": result,
                "previous": old_result,
            }),
            None => serde_json::to_value(&result)?,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_result(&cli.input, &result, config.decimal_places);
        if let Some((path, old_result)) = &previous {
            print_result(path, old_result, config.decimal_places);
        }
    }

    if let Some(path) = &cli.export {
        report::export_csv_to_file(&series, path)
            .with_context(|| format!("Failed to export table to {}", path.display()))?;
        tracing::info!("Exported normalized table to {}", path.display());
    }

    Ok(())
}

fn print_result(source: &Path, result: &ThresholdResult, decimals: u8) {
    println!("{} ({})", source.display(), result.policy);
    if result.insufficient_data {
        println!("  Insufficient data: at least {} stages required", MIN_STAGES);
        return;
    }
    for line in report::marker_lines(result, decimals) {
        println!("  {}", line);
    }
}
