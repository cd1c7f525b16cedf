//! Console presentation of training and evaluation results.
//!
//! The trainer and classifier only return structured values; every
//! `println!` of the crate lives here so that callers who want a
//! different presentation can ignore this module entirely.

use colored::Colorize;

use crate::classifier::Prediction;
use crate::evaluation::Evaluation;
use crate::naive_bayes::NaiveBayesModel;

const WIDTH: usize = 9;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;

/// Print every learned probability of `model`:
/// the class priors and the full conditional table.
pub fn print_model(model: &NaiveBayesModel) {
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "TRAINED MODEL".bold(), "",
    );
    println!("{header}");

    println!("{}", "Class priors".bold());
    for label in model.classes() {
        let prior = model.prior(label)
            .expect("model classes are always known to the model");
        println!(
            "  P({}) = {}",
            label.green(),
            format!("{prior:>WIDTH$.PREC_WIDTH$}").yellow(),
        );
    }

    for label in model.classes() {
        println!("\n{} {}", "Class:".bold(), label.bold().green());
        for feature in model.schema().features() {
            for value in feature.values() {
                let p = model.conditional(label, feature.name(), value)
                    .expect("schema values always have an entry");
                println!(
                    "  P({}={} | {}) = {}",
                    feature.name().blue(),
                    value.cyan(),
                    label.green(),
                    format!("{p:>WIDTH$.PREC_WIDTH$}").yellow(),
                );
            }
        }
    }
    println!("{:=>FULL_WIDTH$}", "");
}

/// Print the score vector and the chosen label of one prediction.
pub fn print_prediction(id: &str, prediction: &Prediction) {
    println!("{} {}", "Instance:".bold(), id);
    for (label, score) in prediction.scores() {
        println!(
            "  score({}) = {}",
            label.green(),
            format!("{score:>WIDTH$.PREC_WIDTH$e}").yellow(),
        );
    }
    println!(
        "  {} {}",
        "Predicted class:".bold(),
        prediction.label().bold().green(),
    );
}

/// Print the per-record outcomes and the accuracy summary of
/// an evaluation run.
pub fn print_evaluation(evaluation: &Evaluation) {
    for outcome in evaluation.outcomes() {
        match outcome.result() {
            Ok(prediction) => {
                print_prediction(outcome.id(), prediction);
                let tag = if outcome.is_correct() {
                    "[HIT] ".bold().green()
                } else {
                    "[MISS]".bold().red()
                };
                println!(
                    "{tag} Actual: {} Predicted: {}\n",
                    outcome.actual().green(),
                    prediction.label().yellow(),
                );
            }
            Err(e) => {
                println!(
                    "{} {} {e}",
                    "[SKIP]".bold().magenta(),
                    outcome.id(),
                );
            }
        }
    }

    let accuracy = format!("{:.2}%", 100f64 * evaluation.accuracy());
    println!(
        "\n{} {} ({} / {} evaluated, {} skipped)",
        "Accuracy:".bold(),
        accuracy.bold().cyan(),
        evaluation.n_correct(),
        evaluation.n_evaluated(),
        evaluation.n_skipped(),
    );
}
