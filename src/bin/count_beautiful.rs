use anyhow::{bail, Context, Result};
use beautiful_numbers::{count_beautiful_numbers, enumerate::table_mismatches, WAYS};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Count 13-digit base-13 numerals whose first and last six digits have equal sums
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print N(S), the number of halves with digit sum S, for every S
    #[arg(long)]
    table: bool,

    /// Cross-check the table by enumerating all 13^6 halves
    #[arg(long)]
    verify: bool,

    /// Log timings and progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    if args.table {
        for (sum, ways) in WAYS.iter().enumerate() {
            println!("{:>2} {}", sum, ways);
        }
    }

    if args.verify {
        let start_time = std::time::Instant::now();
        let mismatches = table_mismatches();
        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "enumerated all halves"
        );

        if !mismatches.is_empty() {
            for m in &mismatches {
                warn!(
                    sum = m.sum,
                    formula = m.formula,
                    enumerated = m.enumerated,
                    "table entry differs from enumeration"
                );
            }
            bail!("{} table entries failed verification", mismatches.len());
        }
        info!("table verified against enumeration");
    }

    let start_time = std::time::Instant::now();
    let total = count_beautiful_numbers();
    info!(elapsed_ns = start_time.elapsed().as_nanos() as u64, "computed total");

    println!("{}", total);

    Ok(())
}
