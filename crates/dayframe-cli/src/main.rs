use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};

use dayframe_cli::{logging, process_file, run_daily, AppConfig, PipelineOverrides};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Crop, letterbox, recolor and rotate the daily image into a small JPEG"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON config file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: PipelineOverrides,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the image of the day and save the processed result
    Daily {
        /// Output file (default: images/latest.jpg or the config's output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fetch this date (YYYY-MM-DD) instead of today's target date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Process a local image file
    Process {
        /// Input image path (jpg/png)
        input: PathBuf,
        /// Output JPEG path
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", logging::fatal_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.overrides.apply(&mut config.pipeline);

    match cli.command {
        Command::Daily { output, date } => {
            let written = run_daily(&config, output.as_deref(), date)
                .context("Failed to produce the daily image")?;
            println!("Wrote: {}", written.display());
        }
        Command::Process { input, output } => {
            process_file(&input, &output, &config.pipeline)
                .with_context(|| format!("Failed to process {}", input.display()))?;
            println!("Wrote: {}", output.display());
        }
    }
    Ok(())
}
