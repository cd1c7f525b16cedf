//! Catbayes CLI binary.
//!
//! Trains a categorical naive Bayes model on one CSV file, prints the
//! learned probability tables, evaluates the model on a second CSV
//! file, and prints the per-record outcomes and the final accuracy.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use catbayes::prelude::*;
use catbayes::report;

/// The nine-feature breast-cancer catalog the tool ships with.
const DEFAULT_SCHEMA: &str =
    include_str!("../../data/breast-cancer.schema.json");

#[derive(Debug, Parser)]
#[command(name = "catbayes", version, about)]
struct Args {
    /// Path to the evaluation data (CSV).
    test_file: PathBuf,

    /// Path to the training data (CSV).
    train_file: PathBuf,

    /// Path to a JSON feature schema.
    /// Defaults to the bundled breast-cancer catalog.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let schema = match &args.schema {
        Some(path) => FeatureSchema::from_json_file(path)?,
        None => FeatureSchema::from_json_str(DEFAULT_SCHEMA)?,
    };
    let schema = Arc::new(schema);

    let train = SampleReader::new()
        .file(&args.train_file)
        .schema(Arc::clone(&schema))
        .read()?;
    let model = NaiveBayes::new().fit(&train)?;
    report::print_model(&model);

    // Evaluation data is read leniently: a record with an
    // out-of-vocabulary value is flagged and skipped, not fatal.
    let test = SampleReader::new()
        .file(&args.test_file)
        .schema(Arc::clone(&schema))
        .strict(false)
        .read()?;
    let evaluation = evaluate(&model, &test)?;
    report::print_evaluation(&evaluation);

    Ok(())
}
