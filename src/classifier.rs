//! The classifier-side seam: the [`Classifier`] trait and the
//! [`Prediction`] value it produces.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sample::{Record, Sample};

/// The outcome of scoring one record: the arg-max class label together
/// with the per-class score vector that produced it.
///
/// Scores are unnormalized relative posteriors. They are only
/// meaningful for comparison across classes of the same prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    label: String,
    scores: Vec<(String, f64)>,
}

impl Prediction {
    pub(crate) fn new(label: String, scores: Vec<(String, f64)>) -> Self {
        Self { label, scores }
    }

    /// The predicted class label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The per-class scores, in the model's class order.
    pub fn scores(&self) -> &[(String, f64)] {
        &self.scores[..]
    }

    /// The score of the class named `label`, if the model knows it.
    pub fn score_of(&self, label: &str) -> Option<f64> {
        self.scores.iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| *s)
    }
}

/// A trait that defines the behavior of a trained classifier.
/// You only need to implement the `predict` method.
pub trait Classifier: Sync {
    /// Predicts the class label of `record`,
    /// returning the label together with the per-class scores.
    fn predict(&self, record: &Record) -> Result<Prediction>;

    /// Predicts the class labels of every record in `sample`.
    ///
    /// Predictions over a trained model are independent, so the
    /// records are scored in parallel; the returned vector keeps the
    /// record order of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<Result<Prediction>> {
        sample.records()
            .par_iter()
            .map(|record| self.predict(record))
            .collect::<Vec<_>>()
    }
}
