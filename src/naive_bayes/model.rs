use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, Prediction};
use crate::error::{Error, Result};
use crate::sample::Record;
use crate::schema::FeatureSchema;

/// The trained naive Bayes model: per-class priors and, per class and
/// feature, a smoothed probability distribution over that feature's
/// permitted values.
///
/// A model is immutable once training finishes. It is the sole shared
/// artifact of concurrent predictions, which is why it is safe for
/// [`Classifier::predict_all`] to score records in parallel against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    pub(super) schema: Arc<FeatureSchema>,
    /// Indexed by class.
    pub(super) priors: Vec<f64>,
    /// Indexed by class, feature, value.
    pub(super) conditionals: Vec<Vec<Vec<f64>>>,
}

impl NaiveBayesModel {
    /// The schema this model was trained against.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// The class labels, sorted lexicographically.
    pub fn classes(&self) -> &[String] {
        self.schema.classes()
    }

    /// The prior probability of the class named `label`.
    /// Fails with [`Error::UnknownClass`] on a label outside the
    /// configured class set.
    pub fn prior(&self, label: &str) -> Result<f64> {
        let c = self.class_index(label)?;
        Ok(self.priors[c])
    }

    /// The smoothed probability of observing `feature = value` given
    /// the class named `label`.
    ///
    /// Fails with [`Error::UnknownClass`], [`Error::UnknownFeature`],
    /// or [`Error::UnknownCategory`] when the respective component of
    /// the triple is not part of the model.
    pub fn conditional(&self, label: &str, feature: &str, value: &str)
        -> Result<f64>
    {
        let c = self.class_index(label)?;
        let j = self.schema.feature_index(feature)?;
        let v = self.schema.features()[j]
            .value_index(value)
            .ok_or_else(|| Error::UnknownCategory {
                feature: feature.to_string(),
                value: value.to_string(),
            })?;
        Ok(self.conditionals[c][j][v])
    }

    /// Computes the unnormalized posterior score of every class for
    /// `record`: the class prior multiplied by the conditional
    /// probability of each observed feature value given that class.
    /// The vector is indexed in class order.
    ///
    /// Fails with [`Error::UnknownCategory`] when some value of
    /// `record` has no probability entry, i.e. lies outside its
    /// feature's permitted domain.
    pub fn scores(&self, record: &Record) -> Result<Vec<f64>> {
        // Resolve every value to its domain index first so that an
        // out-of-vocabulary record fails before any score is built.
        let value_indices = self.schema.features()
            .iter()
            .enumerate()
            .map(|(j, feature)| {
                let value = record.value(j);
                feature.value_index(value)
                    .ok_or_else(|| Error::UnknownCategory {
                        feature: feature.name().to_string(),
                        value: value.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let scores = self.priors.iter()
            .zip(&self.conditionals)
            .map(|(&prior, rows)| {
                rows.iter()
                    .zip(&value_indices)
                    .map(|(row, &v)| row[v])
                    .product::<f64>()
                    * prior
            })
            .collect::<Vec<_>>();
        Ok(scores)
    }

    fn class_index(&self, label: &str) -> Result<usize> {
        self.schema.class_index(label)
            .ok_or_else(|| Error::UnknownClass { label: label.to_string() })
    }
}

impl Classifier for NaiveBayesModel {
    /// Predicts the class of `record` by arg-max over the scores of
    /// [`NaiveBayesModel::scores`]. A record's label, if present,
    /// is ignored.
    ///
    /// Ties are broken deterministically: class labels are kept in
    /// lexicographic order and a candidate must score *strictly*
    /// higher to displace the incumbent, so the lexicographically
    /// smallest of the tied labels wins.
    fn predict(&self, record: &Record) -> Result<Prediction> {
        let scores = self.scores(record)?;

        let mut best = 0;
        for (c, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = c;
            }
        }

        let classes = self.classes();
        let label = classes[best].clone();
        let scores = classes.iter()
            .cloned()
            .zip(scores)
            .collect::<Vec<_>>();
        Ok(Prediction::new(label, scores))
    }
}
