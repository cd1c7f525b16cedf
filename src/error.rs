//! Error types for the `catbayes` library.
//!
//! Every fallible operation in this crate reports its failure to the
//! immediate caller through [`Error`]; nothing is retried or silently
//! swallowed. Skip-and-continue policies (e.g. tolerating records that
//! cannot be scored) belong to the evaluation layer, not to the trainer
//! or the classifier.

use std::io;

use thiserror::Error;

/// A specialized `Result` type for catbayes operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for schema construction, file loading,
/// training, and prediction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors raised while reading a data or schema file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A query referenced a feature name that is not in the schema.
    #[error("unknown feature `{name}`")]
    UnknownFeature {
        /// The offending feature name.
        name: String,
    },

    /// The trainer was invoked with zero records.
    #[error("the training set is empty")]
    EmptyTrainingSet,

    /// A record carries a feature value outside the feature's
    /// permitted domain. Raised at ingestion/training time.
    #[error(
        "record `{id}`: value `{value}` is not in the domain \
         of feature `{feature}`"
    )]
    CategoryViolation {
        /// Identifier of the offending record.
        id: String,
        /// The feature whose domain was violated.
        feature: String,
        /// The out-of-domain value.
        value: String,
    },

    /// A prediction-time lookup found no probability entry for
    /// a (feature, value) pair. The value is out-of-vocabulary.
    #[error("no probability entry for `{feature}={value}`")]
    UnknownCategory {
        /// The feature being scored.
        feature: String,
        /// The out-of-vocabulary value.
        value: String,
    },

    /// A record carries a class label outside the configured label set.
    #[error("unknown class label `{label}`")]
    UnknownClass {
        /// The offending label.
        label: String,
    },

    /// A training or evaluation record carries no class label.
    #[error("record `{id}` carries no class label")]
    UnlabeledRecord {
        /// Identifier of the offending record.
        id: String,
    },

    /// A record does not supply exactly one value per schema feature.
    #[error("record `{id}`: expected {expected} feature values, got {got}")]
    IncompleteRecord {
        /// Identifier of the offending record.
        id: String,
        /// Number of features declared by the schema.
        expected: usize,
        /// Number of values the record supplied.
        got: usize,
    },

    /// The schema definition itself is malformed
    /// (empty domain, duplicate name, ...).
    #[error("schema error: {0}")]
    Schema(String),

    /// A JSON schema document failed to parse.
    #[error("failed to parse schema: {0}")]
    SchemaParse(#[from] serde_json::Error),
}
