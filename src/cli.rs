//! Command-line interface components.

use crate::batch::{BatchRunner, resolve_zones};
use crate::config::ForecastConfig;
use crate::constants::ZONES;
use crate::error::ForecastError;
use crate::models::{BatchReport, MarineForecast};
use crate::parser::BulletinParser;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "marine-forecast")]
#[command(about = "Parse NWS coastal marine forecast bulletins into structured records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a bulletin from a file ("-" reads stdin)
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zone code the bulletin belongs to
        #[arg(short, long, value_parser = parse_zone_code)]
        zone: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Fetch and parse bulletins for one or more zones
    Fetch {
        /// Zone codes, e.g. pzz133 pzz135
        #[arg(value_name = "ZONE", required_unless_present = "all")]
        zones: Vec<String>,

        /// Fetch every catalogued zone
        #[arg(long)]
        all: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Override the bulletin directory URL
        #[arg(long)]
        base_url: Option<String>,

        /// Maximum concurrent requests
        #[arg(long)]
        concurrency: Option<usize>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// List catalogued zones
    Zones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Args {
    /// Log level implied by -v/-q flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Command {
    /// Build fetch configuration from defaults plus CLI overrides
    pub fn fetch_config(&self, quiet: bool) -> Option<ForecastConfig> {
        let Command::Fetch {
            base_url,
            concurrency,
            timeout,
            no_progress,
            ..
        } = self
        else {
            return None;
        };

        let mut config = ForecastConfig::default();
        if let Some(url) = base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(n) = concurrency {
            config = config.with_max_concurrent_fetches(*n);
        }
        if let Some(secs) = timeout {
            config = config.with_request_timeout_secs(*secs);
        }
        if !no_progress && !quiet {
            config = config.with_progress();
        }
        Some(config)
    }
}

/// Run the selected command; `Ok(false)` means some zones failed
pub async fn run(args: Args) -> Result<bool> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Command::Parse { file, zone, format } => {
            let text = read_bulletin(file)?;
            let forecast = BulletinParser::new().parse(&text, zone);
            print_forecasts(std::slice::from_ref(&forecast), *format, false)?;
            Ok(true)
        }
        Command::Fetch {
            zones, all, format, ..
        } => {
            let zones = resolve_zones(zones, *all)?;
            let config = args
                .command
                .fetch_config(args.quiet)
                .context("fetch configuration missing")?;

            info!("Fetching {} zones from {}", zones.len(), config.base_url);
            let report = BatchRunner::new(config)?.run(&zones).await;

            let forecasts: Vec<MarineForecast> = report.forecasts().cloned().collect();
            print_forecasts(&forecasts, *format, true)?;
            report_failures(&report);
            Ok(report.all_succeeded())
        }
        Command::Zones => {
            for (code, name) in ZONES {
                println!("{}  {}", code.to_uppercase().bright_cyan(), name);
            }
            Ok(true)
        }
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("marine_forecast={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Reject blank zone codes; other values are passed through trimmed
fn parse_zone_code(value: &str) -> std::result::Result<String, String> {
    let code = value.trim();
    if code.is_empty() {
        return Err("zone code must not be empty".to_string());
    }
    Ok(code.to_string())
}

/// Read bulletin text from a file, or stdin for "-"
pub fn read_bulletin(path: &Path) -> crate::error::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|source| ForecastError::BulletinFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Print forecasts; a single parsed bulletin is emitted as one JSON object
fn print_forecasts(forecasts: &[MarineForecast], format: OutputFormat, as_list: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = match forecasts {
                [single] if !as_list => serde_json::to_string_pretty(single),
                many => serde_json::to_string_pretty(many),
            }
            .context("Failed to serialise forecast")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for forecast in forecasts {
                print!("{}", render_text(forecast));
            }
        }
    }
    Ok(())
}

/// Human-readable summary of a forecast
pub fn render_text(forecast: &MarineForecast) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        forecast.zone.bright_green().bold(),
        forecast.name.bright_white()
    ));
    out.push_str(&format!(
        "  {} {}\n  {} {}\n",
        "Issued:".bright_cyan(),
        forecast.issued.to_rfc3339(),
        "Expires:".bright_cyan(),
        forecast.expires.to_rfc3339()
    ));

    for period in &forecast.periods {
        out.push_str(&format!("\n  {}\n", period.name.bright_yellow().bold()));
        if !period.wind.is_empty() {
            out.push_str(&format!("    {} {}\n", "Wind:".bright_cyan(), period.wind));
        }
        if !period.waves.is_empty() {
            out.push_str(&format!("    {} {}\n", "Waves:".bright_cyan(), period.waves));
        }
        if let Some(weather) = &period.weather {
            out.push_str(&format!("    {} {}\n", "Weather:".bright_cyan(), weather));
        }
    }
    out.push('\n');
    out
}

fn report_failures(report: &BatchReport) {
    for outcome in &report.outcomes {
        if let Err(e) = &outcome.result {
            let label = if e.is_transient() {
                "unavailable".bright_yellow()
            } else {
                "failed".bright_red()
            };
            eprintln!("{} {}: {}", outcome.zone.bold(), label, e);
        }
    }

    eprintln!(
        "{} {} ok, {} unavailable, {} failed in {}ms",
        "Summary:".bright_cyan(),
        report.succeeded().to_string().bright_white(),
        report.transiently_unavailable().to_string().bright_white(),
        report.hard_failed().to_string().bright_white(),
        report.processing_time_ms
    );
}
