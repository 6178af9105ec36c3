use std::path::PathBuf;
use std::sync::Arc;
use structopt::StructOpt;

use authhub_risk::config::{self, Config};
use authhub_risk::detection::{CatalogView, FixedClock, RiskEvaluator};
use authhub_risk::models::LoginEvent;
use authhub_risk::output::{OutputFormat, OutputHandler};

/// Login risk scoring command line interface
#[derive(StructOpt, Debug)]
#[structopt(name = "risk", about = "Login risk scoring CLI")]
pub enum Cli {
    /// Generate a default configuration file
    Config {
        /// Output path for the configuration file
        #[structopt(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
    /// Score login events read from a JSON file (one object or an array)
    Analyze {
        /// Path to the JSON file
        #[structopt(short, long)]
        file: PathBuf,
        /// Configuration file supplying the output settings
        #[structopt(short, long)]
        config: Option<PathBuf>,
        /// Output format: json, jsonl or console (overrides the config)
        #[structopt(long)]
        format: Option<String>,
        /// Append assessments to this file instead of stdout (overrides the config)
        #[structopt(short, long)]
        output: Option<PathBuf>,
        /// Pin the local hour (0-23) instead of reading the clock
        #[structopt(long)]
        hour: Option<u32>,
    },
    /// Print the risk factor weights and status thresholds
    Factors,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::logger(log::LevelFilter::Info, std::env::var("RUST_LOG").ok().as_deref()).init();

    let cli = Cli::from_args();

    match cli {
        Cli::Config { output } => {
            let config = Config::default();
            config.to_file(&output)?;
            println!("Default configuration written to: {:?}", output);
        }
        Cli::Analyze { file, config, format, output, hour } => {
            if !file.exists() {
                eprintln!("File not found: {:?}", file);
                std::process::exit(1);
            }

            let evaluator = match hour {
                Some(hour) => RiskEvaluator::with_clock(Arc::new(FixedClock::at_hour(hour)?)),
                None => RiskEvaluator::new(),
            };

            let contents = std::fs::read_to_string(&file)?;
            let value: serde_json::Value = serde_json::from_str(&contents)?;
            let events: Vec<LoginEvent> = match value {
                serde_json::Value::Array(_) => serde_json::from_value(value)?,
                other => vec![serde_json::from_value(other)?],
            };
            log::info!("Scoring {} event(s) from {:?}", events.len(), file);

            let settings = match config {
                Some(path) => Config::from_file(&path)?.output,
                None => Config::default().output,
            };
            let format = format.unwrap_or(settings.format);
            let mut handler =
                OutputHandler::new(OutputFormat::parse(&format), output.or(settings.file_path))?;
            for event in &events {
                handler.write_assessment(&evaluator.evaluate(event))?;
            }
            handler.flush()?;
        }
        Cli::Factors => {
            println!("{}", serde_json::to_string_pretty(&CatalogView::default())?);
        }
    }

    Ok(())
}
