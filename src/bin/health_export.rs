//! Non-interactive export of the county health table.
//!
//! `csv` writes the full 2023 dataset to `florida-health-data-2023.csv`;
//! `json` prints the filtered, sorted table view to stdout.

use clap::{Parser, ValueEnum};
use florida_health::{
    config::Config,
    csv_export, florida_counties,
    metric::MetricKind,
    table_view::{SortDirection, SortField, SortSpec, TableView},
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "health-export")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export Florida county health metrics as CSV or JSON")]
struct Cli {
    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the CSV file, overrides the configured export directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// County name filter (json only)
    #[arg(long, default_value = "")]
    filter: String,

    /// Sort field: county, population or a metric key (json only)
    #[arg(long, default_value = "county")]
    sort: SortField,

    #[arg(long)]
    descending: bool,

    /// Metric the view highlights (json only)
    #[arg(short, long, default_value = "lowBirthWeight")]
    metric: MetricKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(cli.config.as_deref())?;

    match cli.format {
        Format::Csv => {
            let directory = cli.out_dir.unwrap_or(config.export.directory);
            let path = csv_export::write_export(&directory, florida_counties())?;
            println!("{}", path.display());
        }
        Format::Json => {
            let direction = if cli.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let view = TableView::build(
                florida_counties(),
                cli.metric,
                &cli.filter,
                SortSpec::new(cli.sort, direction),
            );
            tracing::info!(rows = view.len(), "Exporting table view as JSON");
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
