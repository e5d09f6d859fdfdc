use anyhow::{bail, Context, Result};
use beautiful_numbers::sample::{beautiful_fraction, random_beautiful_numeral, random_numeral};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Generate random 13-digit base-13 numerals, one per line.
///
/// Without `--beautiful-only` every numeral is drawn uniformly, so about 3%
/// of the output is beautiful. With it, numerals are drawn uniformly among the
/// beautiful ones only. The output can be fed to `check-numeral --input`.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random base-13 numerals")]
struct Args {
    /// Number of numerals to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Only emit beautiful numerals
    #[arg(long)]
    beautiful_only: bool,

    /// Random seed (if omitted, uses entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log generation statistics to stderr
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

    if args.count == 0 {
        bail!("count must be positive");
    }

    // Initialize RNG
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            // Use system entropy
            let seed: u64 = rand::thread_rng().gen();
            info!(seed, "seeded from entropy");
            StdRng::seed_from_u64(seed)
        }
    };

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut beautiful = 0usize;
    for _ in 0..args.count {
        let numeral = if args.beautiful_only {
            random_beautiful_numeral(&mut rng)
        } else {
            random_numeral(&mut rng)
        };
        if numeral.is_beautiful() {
            beautiful += 1;
        }
        writeln!(writer, "{}", numeral)?;
    }

    // Flush explicitly
    writer.flush()?;

    info!(
        count = args.count,
        beautiful,
        observed = beautiful as f64 / args.count as f64,
        exact = beautiful_fraction(),
        "generated numerals"
    );

    Ok(())
}
