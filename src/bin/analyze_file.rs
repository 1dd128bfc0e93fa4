//! Runs the batch analysis over a local CSV or Excel file and writes the augmented CSV.
//!
//! Usage: analyze_file <input.csv|xlsx> [output.csv] [--column NAME]

use anyhow::{bail, Context, Result};
use dotenv::dotenv;

use review_sentiment::config::Settings;
use review_sentiment::export::{write_csv_file, DEFAULT_EXPORT_FILE_NAME};
use review_sentiment::{Pipeline, ReviewTable, SentimentCategory};

struct Args {
    input: String,
    output: String,
    column: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut column = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--column" | "-c" => {
                column = Some(args.next().context("--column needs a value")?);
            }
            "--help" | "-h" => {
                println!("Usage: analyze_file <input.csv|xlsx> [output.csv] [--column NAME]");
                std::process::exit(0);
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let Some(input) = positional.next() else {
        bail!("Usage: analyze_file <input.csv|xlsx> [output.csv] [--column NAME]");
    };
    let output = positional
        .next()
        .unwrap_or_else(|| DEFAULT_EXPORT_FILE_NAME.to_string());

    Ok(Args {
        input,
        output,
        column,
    })
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = parse_args()?;
    let settings = Settings::from_env();
    let column = args.column.unwrap_or(settings.review_column);

    println!("📂 Reading {}...", args.input);
    let table = ReviewTable::from_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input))?;

    let pipeline = Pipeline::lexicon().with_max_rows(settings.max_batch_rows);
    let report = pipeline.run_batch(&table, &column)?;
    let counts = report.result.counts;

    println!("🧠 Analyzed {} reviews", counts.total());
    for category in SentimentCategory::ALL {
        println!(
            "   {:<9} {:>6}  ({:.1}%)",
            category.as_str(),
            counts.get(category),
            counts.share(category)
        );
    }
    println!("💡 Investment suggestion: {}", report.verdict.advice());

    write_csv_file(&args.output, &table, &report.result)
        .with_context(|| format!("Failed to write {}", args.output))?;
    println!("💾 Results saved to {}", args.output);

    Ok(())
}
