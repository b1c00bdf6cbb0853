mod app;

use clap::Parser;
use florida_health::{
    app_state::DashboardState,
    config::{generate_default_config, Config},
    metric::MetricKind,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "florida-health-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal dashboard of Florida county maternal and infant health metrics")]
struct Cli {
    /// Config file (default: platform config dir, then ./config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// County selected at startup
    #[arg(long)]
    county: Option<String>,

    /// Metric selected at startup, e.g. lowBirthWeight
    #[arg(short, long)]
    metric: Option<MetricKind>,

    /// Initial county search text
    #[arg(short, long)]
    search: Option<String>,

    /// Print a config file with every default and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.print_default_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(county) = cli.county {
        config.display.county = county;
    }
    if let Some(metric) = cli.metric {
        config.display.metric = metric.key().to_string();
    }

    app::logging::setup_logger(&config.logging)?;

    let mut app_state = DashboardState::new(&config.display);
    if let Some(search) = cli.search {
        app_state.search = search;
    }

    app::run(app_state, &config)
}
