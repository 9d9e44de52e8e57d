use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use distplot::data::storage::DataDirectory;
use distplot::state::AppState;
use distplot::{App, init_logging};
use distplot_core::DistributionKind;

#[derive(Parser, Debug)]
#[command(name = "distplot")]
#[command(about = "Interactive probability density plots in the terminal")]
struct Args {
    /// Distribution shown first (normal, exponential, gamma, pareto)
    #[arg(short = 'D', long)]
    distribution: Option<DistributionKind>,

    /// Path to the data directory (default: ~/.distplot/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of <data-dir>/config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let storage = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    init_logging(storage.root(), &args.log_level)?;

    // Everything that can fail on bad input happens before the terminal is taken over
    let loaded = storage
        .load(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    match &loaded.config_source {
        Some(path) => tracing::info!(path = %path.display(), "loaded config"),
        None => tracing::info!("no config file, using defaults"),
    }

    let state = AppState::from_loaded(loaded, args.distribution)
        .wrap_err("invalid configuration")?;
    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!(distribution = %app.state().active_tab, "Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
