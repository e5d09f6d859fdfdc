use anyhow::{bail, Context, Result};
use beautiful_numbers::{
    parser::{parse_input_file, parse_numeral},
    Numeral,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Check whether base-13 numerals are beautiful
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Numerals to check: 13 digits each, using 0-9 and A-C
    numerals: Vec<String>,

    /// File with one numeral per line ('#' starts a comment line)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log a summary to stderr
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

fn describe(numeral: &Numeral) -> String {
    if numeral.is_beautiful() {
        format!("{} beautiful (half-sum {})", numeral, numeral.left_sum())
    } else {
        format!(
            "{} not beautiful (left {}, right {})",
            numeral,
            numeral.left_sum(),
            numeral.right_sum()
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    let mut numerals = Vec::new();
    for text in &args.numerals {
        let numeral = parse_numeral(text).with_context(|| format!("invalid numeral {:?}", text))?;
        numerals.push(numeral);
    }
    if let Some(path) = &args.input {
        let from_file = parse_input_file(path)
            .with_context(|| format!("failed to parse numerals from {:?}", path))?;
        info!(count = from_file.len(), "read numerals from file");
        numerals.extend(from_file);
    }

    if numerals.is_empty() {
        bail!("no numerals given; pass them as arguments or with --input");
    }

    for numeral in &numerals {
        println!("{}", describe(numeral));
    }

    let beautiful = numerals.iter().filter(|n| n.is_beautiful()).count();
    info!(total = numerals.len(), beautiful, "checked numerals");

    Ok(())
}
