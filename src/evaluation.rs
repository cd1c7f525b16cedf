//! Held-out evaluation: score every labeled record of a sample,
//! compare against ground truth, and aggregate an accuracy figure.
//!
//! This is glue around [`Classifier::predict_all`], not part of the
//! trainer/classifier contract. Records the classifier cannot score
//! (out-of-vocabulary values) are flagged and skipped, never abort
//! the run, and are excluded from the accuracy denominator.

use crate::classifier::{Classifier, Prediction};
use crate::error::{Error, Result};
use crate::sample::Sample;

/// The evaluation outcome of one record.
#[derive(Debug)]
pub struct Outcome {
    id: String,
    actual: String,
    result: Result<Prediction>,
}

impl Outcome {
    /// The record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ground-truth class label.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// The prediction, or the per-record error that prevented one.
    pub fn result(&self) -> &Result<Prediction> {
        &self.result
    }

    /// Returns `true` if the record was scored and the predicted
    /// label matches the ground truth.
    pub fn is_correct(&self) -> bool {
        match &self.result {
            Ok(prediction) => prediction.label() == self.actual,
            Err(_) => false,
        }
    }
}

/// The aggregate result of evaluating a classifier on one sample.
#[derive(Debug)]
pub struct Evaluation {
    outcomes: Vec<Outcome>,
    n_correct: usize,
    n_evaluated: usize,
    n_skipped: usize,
}

impl Evaluation {
    /// Per-record outcomes, in sample order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes[..]
    }

    /// The number of records whose predicted label matched
    /// the ground truth.
    pub fn n_correct(&self) -> usize {
        self.n_correct
    }

    /// The number of records that were scored successfully.
    pub fn n_evaluated(&self) -> usize {
        self.n_evaluated
    }

    /// The number of records skipped because they could not be scored.
    pub fn n_skipped(&self) -> usize {
        self.n_skipped
    }

    /// Correct predictions over evaluated records, in `[0, 1]`.
    /// Returns `0.0` when nothing was evaluated.
    pub fn accuracy(&self) -> f64 {
        if self.n_evaluated == 0 {
            return 0f64;
        }
        self.n_correct as f64 / self.n_evaluated as f64
    }
}

/// Evaluate `classifier` on every record of `sample`.
///
/// Every record must carry a ground-truth label; a record without one
/// fails the whole evaluation with [`Error::UnlabeledRecord`].
/// Per-record prediction failures are collected into the returned
/// [`Evaluation`] instead.
pub fn evaluate<C>(classifier: &C, sample: &Sample) -> Result<Evaluation>
    where C: Classifier,
{
    let predictions = classifier.predict_all(sample);

    let mut outcomes = Vec::with_capacity(predictions.len());
    let mut n_correct = 0;
    let mut n_evaluated = 0;
    let mut n_skipped = 0;
    for (record, result) in sample.iter().zip(predictions) {
        let actual = record.label()
            .ok_or_else(|| Error::UnlabeledRecord {
                id: record.id().to_string(),
            })?
            .to_string();

        let outcome = Outcome {
            id: record.id().to_string(),
            actual,
            result,
        };
        match &outcome.result {
            Ok(_) => {
                n_evaluated += 1;
                if outcome.is_correct() {
                    n_correct += 1;
                }
            }
            Err(_) => {
                n_skipped += 1;
            }
        }
        outcomes.push(outcome);
    }

    Ok(Evaluation { outcomes, n_correct, n_evaluated, n_skipped })
}
