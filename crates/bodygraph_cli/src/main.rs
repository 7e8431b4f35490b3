use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bodygraph_ephem::{AnalyticEphemeris, NodeMode};
use bodygraph_search::{calculate_chart, find_design_jd};
use bodygraph_time::BirthTime;

mod config;
mod render;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "bodygraph", about = "Human Design bodygraph calculator")]
struct Cli {
    /// Log search details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Birth moment shared by `chart` and `design`.
#[derive(clap::Args)]
struct BirthArgs {
    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local birth time (HH:MM, 24-hour)
    #[arg(long)]
    time: String,
    /// Zone offset from UTC in hours (e.g. -7, 5.5)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: f64,
    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Lunar node: mean or true (default from config, else true)
    #[arg(long)]
    node: Option<NodeMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth moment
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Name printed in the header
        #[arg(long)]
        name: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Gate and line for an ecliptic longitude
    Gate {
        /// Tropical longitude in degrees
        #[arg(allow_hyphen_values = true)]
        degree: f64,
    },
    /// Design moment (Sun 88° of arc before birth)
    Design {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_date(s: &str) -> anyhow::Result<(i32, u32, u32)> {
    let mut parts = s.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("date must be YYYY-MM-DD, got {s:?}");
    };
    Ok((
        y.parse().with_context(|| format!("year in {s:?}"))?,
        m.parse().with_context(|| format!("month in {s:?}"))?,
        d.parse().with_context(|| format!("day in {s:?}"))?,
    ))
}

fn parse_time(s: &str) -> anyhow::Result<(u32, u32)> {
    let Some((h, m)) = s.split_once(':') else {
        bail!("time must be HH:MM, got {s:?}");
    };
    Ok((
        h.parse().with_context(|| format!("hour in {s:?}"))?,
        m.parse().with_context(|| format!("minute in {s:?}"))?,
    ))
}

impl BirthArgs {
    fn birth_time(&self) -> anyhow::Result<BirthTime> {
        let (year, month, day) = parse_date(&self.date)?;
        let (hour, minute) = parse_time(&self.time)?;
        Ok(BirthTime::new(year, month, day, hour, minute, self.utc_offset))
    }

    /// Settings file merged with flags; flags win.
    fn settings(&self) -> anyhow::Result<(CliConfig, AnalyticEphemeris)> {
        let config = CliConfig::resolve(self.config.as_deref())?;
        let node_mode = self.node.unwrap_or(config.node_mode);
        Ok((config, AnalyticEphemeris::new(node_mode)))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Chart { birth, name, json } => {
            let (config, eph) = birth.settings()?;
            let time = birth.birth_time()?;
            let result = calculate_chart(&eph, &time, &config.chart_config())
                .context("computing chart")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::chart_text(&result, name.as_deref()));
            }
        }

        Commands::Gate { degree } => {
            println!("{}", render::gate_text(degree)?);
        }

        Commands::Design { birth } => {
            let (config, eph) = birth.settings()?;
            let jd = birth.birth_time()?.to_jd_ut()?;
            let design = find_design_jd(&eph, jd, &config.design)?;
            println!("{}", render::design_text(jd, &design)?);
        }
    }

    Ok(())
}
