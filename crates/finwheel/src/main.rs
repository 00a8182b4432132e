use clap::{Parser, ValueEnum};
use finwheel::data::storage::DataDirectory;
use finwheel::{App, LaunchOptions, init_logging};
use finwheel_core::Period;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    CurrentMonth,
    PreviousMonth,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::CurrentMonth => Period::CurrentMonth,
            PeriodArg::PreviousMonth => Period::PreviousMonth,
            PeriodArg::Year => Period::Year,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "finwheel")]
#[command(about = "Income and outcome by category, as a terminal pie chart")]
struct Args {
    /// Path to the data directory (default: ~/.finwheel/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Operations snapshot to open (default: <data-dir>/operations.yaml)
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Period shown at startup (overrides config.yaml)
    #[arg(short, long, value_enum)]
    period: Option<PeriodArg>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let options = LaunchOptions {
        ledger: args.ledger,
        period: args.period.map(Period::from),
    };
    let mut app = App::with_data_dir(data_dir, options);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
