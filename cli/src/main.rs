mod logging;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ordertally_core::{
    period_ends, resolve_day, Config, FileOrderSource, FileSummarySink, ReportService,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ordertally")]
#[command(about = "Daily order summaries split by new and returning customers", long_about = None)]
struct Cli {
    /// Data directory (default: $ORDERTALLY_HOME or ~/.ordertally)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print one summary row per day and customer segment
    Summarize {
        /// Orders file (a JSON array or {"orders": [...]})
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Only orders created on this day (today, yesterday or YYYY-MM-DD)
        #[arg(short, long)]
        day: Option<String>,
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Append summary rows to the sink file
    Append {
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Sink file holding previously appended rows
        #[arg(short, long)]
        sink: Option<PathBuf>,
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Show the week end and month end for a day
    Periods {
        /// today, yesterday or YYYY-MM-DD
        day: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Summarize { input, day, json } => {
            let config = load_config(cli.home)?;
            let day = day.as_deref().map(resolve_day).transpose()?;
            let input = input.unwrap_or_else(|| config.orders_path());

            let service = ReportService::new(FileOrderSource::new(&input));
            let aggregation = service
                .summarize(day)
                .with_context(|| format!("Failed to summarize orders from {}", input.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&aggregation.rows)?);
            } else {
                report::print_rows(&aggregation.rows);
            }
            report::print_coercions(&aggregation.coercions);
        }
        Commands::Append { input, sink, day } => {
            let config = load_config(cli.home)?;
            let day = day.as_deref().map(resolve_day).transpose()?;
            let input = input.unwrap_or_else(|| config.orders_path());
            let sink_path = sink.unwrap_or_else(|| config.sink_path());

            let sink = FileSummarySink::new(&sink_path)
                .with_context(|| format!("Failed to open sink {}", sink_path.display()))?;
            let service = ReportService::new(FileOrderSource::new(&input));
            let appended = service
                .publish(&sink, day)
                .with_context(|| format!("Failed to append summary of {}", input.display()))?;

            println!("Appended {} rows to {}", appended, sink_path.display());
        }
        Commands::Periods { day } => {
            let day = resolve_day(&day)?;
            let ends = period_ends(day);
            println!("Day:       {}", day.format("%Y-%m-%d (%a)"));
            println!("Week end:  {}", ends.week_end.format("%Y-%m-%d (%a)"));
            println!("Month end: {}", ends.month_end.format("%Y-%m-%d (%a)"));
        }
    }
    Ok(())
}

fn load_config(home: Option<PathBuf>) -> Result<Config> {
    let config = Config::load(home).context("Failed to load configuration")?;
    debug!(data_dir = %config.data_dir.display(), "loaded configuration");
    Ok(config)
}
