//! rbl — delivery distance and pricing for rentbasket.
//!
//! ```text
//! rbl quote 122003 201301
//! rbl batch orders.csv [--output out.csv] [--sqlite quotes.db]
//! rbl calibrate samples.csv [--write-factors factors.toml]
//! rbl factors
//! ```
//!
//! Settings come from `--config <path>`, else `rbl.toml` in the working
//! directory, else built-in defaults.  Log verbosity follows `RUST_LOG`
//! (default `info`).

mod config;


use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rb_distance::{CalibrationReport, DetourFactors, DistanceEngine, load_samples_csv};
use rb_output::{
    BatchSummary, CsvWriter, default_output_path, estimate_rows, read_pairs, write_batch,
};
use rb_pricing::quote;

use config::{Config, factors_to_toml};

#[derive(Parser)]
#[command(name = "rbl", about = "Delivery distance and pricing for rentbasket")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote one delivery
    Quote {
        /// Origin pincode
        origin: String,
        /// Destination pincode
        dest: String,
    },
    /// Quote every origin/dest pair in a CSV file
    Batch {
        /// Input CSV with `origin` and `dest` columns
        input: PathBuf,
        /// Output CSV (default: <input>_estimated.csv)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also write results to this SQLite database (needs the `sqlite` feature)
        #[arg(long)]
        sqlite: Option<PathBuf>,
    },
    /// Fit the band multipliers to observed road distances
    Calibrate {
        /// CSV with `origin`, `dest`, `actual_km` columns
        samples: PathBuf,
        /// Write the calibrated factors to this TOML file
        #[arg(long)]
        write_factors: Option<PathBuf>,
    },
    /// Print the active detour factors as TOML
    Factors,
}

fn init_logger() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    pretty_env_logger::formatted_builder().parse_filters(&filters).init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Quote { origin, dest } => run_quote(&config, &origin, &dest),
        Commands::Batch { input, output, sqlite } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            let summary = run_batch(&config, &input, &output, sqlite.as_deref())?;
            println!(
                "Processed {} pairs ({} priced, {} unavailable). Results saved to {}",
                summary.total,
                summary.priced,
                summary.unavailable,
                output.display()
            );
            if let Some(db) = sqlite {
                println!("Results also saved to {}", db.display());
            }
            Ok(())
        }
        Commands::Calibrate { samples, write_factors } => {
            run_calibrate(&config, &samples, write_factors.as_deref()).map(drop)
        }
        Commands::Factors => {
            print!("{}", factors_to_toml(&config.factors)?);
            Ok(())
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn build_engine(config: &Config) -> Result<DistanceEngine> {
    DistanceEngine::from_csv(&config.gazetteer_path, config.factors)
        .with_context(|| format!("loading gazetteer {}", config.gazetteer_path.display()))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("opening {}", path.display()))
}

fn run_quote(config: &Config, origin: &str, dest: &str) -> Result<()> {
    let engine = build_engine(config)?;
    let q = quote(&engine, &config.pricing, origin, dest)?;

    println!("Origin:                    {}", q.origin);
    println!("Destination:               {}", q.dest);
    println!("Straight-line distance:    {:.2} km", q.estimate.haversine_km);
    println!(
        "Detour factor:             {:.3} ({} band)",
        q.estimate.factor, q.estimate.band
    );
    println!("Estimated road distance:   {:.2} km", q.estimate.road_km);
    println!("Delivery price:            ₹{:.2}", q.price);
    println!("Destination service area:  {}", config.service_area.classify(dest));
    Ok(())
}

/// Price every pair in `input`, writing CSV to `output` and optionally
/// SQLite to `sqlite`.  The input is read in full before any output is
/// created, so a malformed input leaves no partial files behind.
fn run_batch(
    config: &Config,
    input:  &Path,
    output: &Path,
    sqlite: Option<&Path>,
) -> Result<BatchSummary> {
    #[cfg(not(feature = "sqlite"))]
    if sqlite.is_some() {
        anyhow::bail!("rbl was built without the `sqlite` feature");
    }

    let engine = build_engine(config)?;
    let (headers, pairs) =
        read_pairs(open(input)?).with_context(|| format!("reading {}", input.display()))?;
    let rows = estimate_rows(&engine, &config.pricing, pairs);

    let mut writer = CsvWriter::from_path(output)
        .with_context(|| format!("creating {}", output.display()))?;
    let summary = write_batch(&headers, &rows, &mut writer)?;

    #[cfg(feature = "sqlite")]
    if let Some(db) = sqlite {
        let mut writer = rb_output::SqliteWriter::new(db)
            .with_context(|| format!("opening {}", db.display()))?;
        write_batch(&headers, &rows, &mut writer)?;
    }

    log::info!(
        "Batch complete: {} rows, {} priced, {} unavailable",
        summary.total,
        summary.priced,
        summary.unavailable
    );
    Ok(summary)
}

/// Calibrate the configured factors against `samples_path`, print them and
/// optionally write them to `write_factors` as a `[factors]` table.
fn run_calibrate(
    config:        &Config,
    samples_path:  &Path,
    write_factors: Option<&Path>,
) -> Result<(DetourFactors, CalibrationReport)> {
    let mut engine = build_engine(config)?;
    let samples = load_samples_csv(samples_path)
        .with_context(|| format!("loading calibration samples {}", samples_path.display()))?;

    let report = engine.calibrate(&samples);
    match report.avg_bias {
        Some(bias) => println!(
            "Calibrated band factors by multiplier {bias:.4} ({} samples used, {} skipped)",
            report.retained, report.skipped
        ),
        None => println!(
            "No usable samples ({} skipped); factors unchanged",
            report.skipped
        ),
    }

    let rendered = factors_to_toml(engine.factors())?;
    print!("{rendered}");

    if let Some(path) = write_factors {
        fs::write(path, &rendered).with_context(|| format!("writing {}", path.display()))?;
        println!("Factors written to {}", path.display());
    }
    Ok((*engine.factors(), report))
}
