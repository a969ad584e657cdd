//! ImmoLab CLI — scrape, clean, and analyze Swiss listing data.
//!
//! Commands:
//! - `scrape` — fetch listings for postal codes and write a raw CSV
//! - `clean` — clean a raw CSV into the canonical dataset shape
//! - `rank` — rank cantons by average price per m² for one market
//! - `ratio` — join buy and rent datasets into a price-to-rent table

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use immolab_core::acquire::{scrape_postal_codes, write_raw_csv, HomegateProvider, StdoutProgress};
use immolab_core::config::AppConfig;
use immolab_core::data::{clean, load_csv, load_dataset};
use immolab_core::domain::Market;
use immolab_core::metrics::{mean_price_by_zip, median_ratio_by_canton, price_to_rent, rank_cantons};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};

#[derive(Parser)]
#[command(
    name = "immolab",
    about = "ImmoLab CLI — Swiss real-estate listing analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch listings for the given postal codes and write a raw CSV.
    Scrape {
        /// Market to scrape: rent or buy.
        #[arg(long)]
        market: String,

        /// Postal codes to fetch (e.g., 1000 1003 8001).
        zip_codes: Vec<u32>,

        /// CSV file with a zip/zip_code column to fetch (merged with the
        /// positional codes).
        #[arg(long)]
        zips: Option<PathBuf>,

        /// Output CSV path. Defaults to data/raw_<market>.csv.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Config file. Defaults to immolab.toml.
        #[arg(long, default_value = "immolab.toml")]
        config: PathBuf,

        /// Override the configured batch size.
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Clean a raw CSV into the canonical dataset shape.
    Clean {
        /// Raw CSV produced by `scrape` (or any CSV with the listing columns).
        #[arg(long)]
        input: PathBuf,

        /// Where to write the cleaned CSV.
        #[arg(long)]
        output: PathBuf,
    },
    /// Rank cantons by average price per m² for one market.
    Rank {
        /// Dataset CSV (cleaned on load).
        #[arg(long)]
        input: PathBuf,

        /// Market the dataset belongs to: rent or buy.
        #[arg(long)]
        market: String,
    },
    /// Join buy and rent datasets into a per-zip price-to-rent table.
    Ratio {
        /// Buy-market dataset CSV.
        #[arg(long)]
        buy: PathBuf,

        /// Rent-market dataset CSV.
        #[arg(long)]
        rent: PathBuf,

        /// Optional output CSV for the joined table.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape {
            market,
            zip_codes,
            zips,
            out,
            config,
            batch_size,
        } => run_scrape(&market, zip_codes, zips.as_deref(), out, &config, batch_size),
        Commands::Clean { input, output } => run_clean(&input, &output),
        Commands::Rank { input, market } => run_rank(&input, &market),
        Commands::Ratio { buy, rent, out } => run_ratio(&buy, &rent, out),
    }
}

fn parse_market(name: &str) -> Result<Market> {
    match name {
        "rent" => Ok(Market::Rent),
        "buy" => Ok(Market::Buy),
        _ => bail!("unknown market '{name}'. Valid: rent, buy"),
    }
}

/// Read postal codes from a CSV with a `zip` or `zip_code` column.
fn read_zip_file(path: &Path) -> Result<Vec<u32>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let idx = headers
        .iter()
        .position(|h| h == "zip" || h == "zip_code" || h == "postal_code")
        .with_context(|| format!("{} has no zip/zip_code column", path.display()))?;

    let mut zips = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = record.get(idx).unwrap_or("").trim();
        if field.is_empty() {
            continue;
        }
        let zip: u32 = field
            .parse()
            .with_context(|| format!("bad postal code '{field}' in {}", path.display()))?;
        zips.push(zip);
    }
    Ok(zips)
}

fn run_scrape(
    market: &str,
    mut zip_codes: Vec<u32>,
    zip_file: Option<&Path>,
    out: Option<PathBuf>,
    config_path: &Path,
    batch_size: Option<usize>,
) -> Result<()> {
    let market = parse_market(market)?;
    if let Some(path) = zip_file {
        zip_codes.extend(read_zip_file(path)?);
    }
    let mut seen = std::collections::HashSet::new();
    zip_codes.retain(|z| seen.insert(*z));
    if zip_codes.is_empty() {
        bail!("no postal codes given (pass them as arguments or via --zips)");
    }
    let config = AppConfig::load_or_default(config_path)?;
    let batch_size = batch_size.unwrap_or(config.scrape.batch_size);
    let out = out
        .unwrap_or_else(|| PathBuf::from(format!("data/raw_{}.csv", market.label().to_lowercase())));

    let throttle = Arc::new(config.throttle());
    let provider = HomegateProvider::new(market, throttle, config.scrape.retry.clone())?;
    let progress = StdoutProgress;

    let (rows, summary) = scrape_postal_codes(&provider, &zip_codes, batch_size, &progress);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }
    write_raw_csv(&out, &rows).with_context(|| format!("writing {}", out.display()))?;
    println!(
        "Wrote {} rows from {} postal code(s) to {}",
        summary.rows,
        summary.succeeded,
        out.display()
    );

    if !summary.all_succeeded() {
        for (zip, err) in &summary.errors {
            eprintln!("Error for {zip}: {err}");
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run_clean(input: &Path, out: &Path) -> Result<()> {
    let raw = load_csv(input)?;
    let before = raw.height();
    let mut cleaned = clean(&raw)?;

    write_csv(out, &mut cleaned)?;
    println!(
        "Cleaned {} → {} rows, written to {}",
        before,
        cleaned.height(),
        out.display()
    );
    Ok(())
}

fn run_rank(input: &Path, market: &str) -> Result<()> {
    let market = parse_market(market)?;
    let df = load_dataset(input)?;
    let ranking = rank_cantons(&df, market.metric_label())?;

    if ranking.height() == 0 {
        println!("No rankable rows in {} (need canton, price, area).", input.display());
        return Ok(());
    }
    println!("{ranking}");
    Ok(())
}

fn run_ratio(buy_path: &Path, rent_path: &Path, out: Option<PathBuf>) -> Result<()> {
    let buy = load_dataset(buy_path)?;
    let rent = load_dataset(rent_path)?;

    let buy_agg = mean_price_by_zip(&buy)?;
    let rent_agg = mean_price_by_zip(&rent)?;
    let mut ratios = price_to_rent(&buy_agg, &rent_agg)?;

    if ratios.height() == 0 {
        println!("No overlapping postal codes between the two datasets.");
        return Ok(());
    }

    println!("{ratios}");
    if ratios.schema().contains("canton") {
        let medians = median_ratio_by_canton(&ratios)?;
        println!("Median break-even years by canton:");
        println!("{medians}");
    }

    if let Some(out) = out {
        write_csv(&out, &mut ratios)?;
        println!("Table written to {}", out.display());
    }
    Ok(())
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
