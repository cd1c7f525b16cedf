use crate::constants::LAPLACE_PSEUDO_COUNT;
use crate::error::{Error, Result};
use crate::sample::Sample;
use super::model::NaiveBayesModel;

/// A factory that produces a [`NaiveBayesModel`] from a labeled sample.
///
/// Training is a single counting pass followed by normalization:
///
/// 1. every class tally and every `(class, feature, value)` tally
///    starts at the Laplace pseudo-count of one;
/// 2. each record increments its class tally and, per feature, the
///    tally of the observed `(class, feature, value)` triple;
/// 3. class tallies are divided by their grand total (the priors),
///    and each `(class, feature)` row is divided by its own total,
///    so every per-feature distribution sums to one on its own.
///
/// The smoothing guarantees that no estimated probability is zero,
/// even for values never observed with a class.
pub struct NaiveBayes;

impl NaiveBayes {
    /// Initializes the trainer. Add-one smoothing is the only
    /// estimator this crate implements, so there is nothing to
    /// configure.
    pub fn new() -> Self {
        Self
    }

    /// Produce a [`NaiveBayesModel`] from `sample`.
    ///
    /// Fails with [`Error::EmptyTrainingSet`] on an empty sample,
    /// [`Error::UnlabeledRecord`] on a record without a class label,
    /// [`Error::UnknownClass`] on a label outside the schema's class
    /// set, and [`Error::CategoryViolation`] on a feature value
    /// outside its declared domain. The whole run is rejected on the
    /// first violation; a partially counted model is never returned.
    pub fn fit(&self, sample: &Sample) -> Result<NaiveBayesModel> {
        if sample.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let schema = sample.schema_arc();
        let n_classes = schema.n_classes();

        let mut class_counts = vec![LAPLACE_PSEUDO_COUNT; n_classes];
        let mut value_counts = vec![
            schema.features()
                .iter()
                .map(|f| vec![LAPLACE_PSEUDO_COUNT; f.n_values()])
                .collect::<Vec<_>>();
            n_classes
        ];

        for record in sample {
            let label = record.label()
                .ok_or_else(|| Error::UnlabeledRecord {
                    id: record.id().to_string(),
                })?;
            let c = schema.class_index(label)
                .ok_or_else(|| Error::UnknownClass {
                    label: label.to_string(),
                })?;
            class_counts[c] += 1f64;

            for (j, feature) in schema.features().iter().enumerate() {
                let value = record.value(j);
                let v = feature.value_index(value)
                    .ok_or_else(|| Error::CategoryViolation {
                        id: record.id().to_string(),
                        feature: feature.name().to_string(),
                        value: value.to_string(),
                    })?;
                value_counts[c][j][v] += 1f64;
            }
        }

        let total = class_counts.iter().sum::<f64>();
        let priors = class_counts.into_iter()
            .map(|count| count / total)
            .collect::<Vec<_>>();

        let conditionals = value_counts.into_iter()
            .map(|rows| {
                rows.into_iter()
                    .map(|row| {
                        let total = row.iter().sum::<f64>();
                        row.into_iter()
                            .map(|count| count / total)
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Ok(NaiveBayesModel { schema, priors, conditionals })
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}
