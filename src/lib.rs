#![warn(missing_docs)]

//!
//! A categorical naive Bayes classifier.
//!
//! Given labeled training records whose features take values from
//! small, fixed, enumerated domains, this crate estimates
//! class-conditional feature distributions and class priors with
//! add-one (Laplace) smoothing, then assigns class labels to unlabeled
//! records by maximizing the resulting posterior score under the
//! naive conditional-independence assumption.
//!
//! The moving parts:
//!
//! - [`FeatureSchema`] — the fixed catalog of features, their
//!   permitted values, and the class-label set. Configuration, never
//!   inferred from data; buildable in code or loadable from JSON.
//! - [`Sample`] / [`Record`] — in-memory observations, read from
//!   `id,label,value_1,...,value_k` CSV files by [`SampleReader`].
//! - [`NaiveBayes`] — the trainer. Consumes a labeled [`Sample`] and
//!   produces an immutable [`NaiveBayesModel`].
//! - [`NaiveBayesModel`] — priors plus conditional probability tables;
//!   implements [`Classifier`] to score and label records.
//! - [`evaluate`](evaluation::evaluate) — held-out evaluation glue
//!   producing per-record outcomes and an accuracy figure.
//!
//! Out-of-domain data is rejected, never silently counted or scored:
//! the trainer fails the run on a domain violation and the classifier
//! fails the single record with
//! [`Error::UnknownCategory`](error::Error::UnknownCategory).

pub mod classifier;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod naive_bayes;
pub mod prelude;
pub mod report;
pub mod sample;
pub mod schema;

pub use classifier::{Classifier, Prediction};
pub use error::{Error, Result};
pub use evaluation::{evaluate, Evaluation, Outcome};
pub use naive_bayes::{NaiveBayes, NaiveBayesModel};
pub use sample::{Record, Sample, SampleReader};
pub use schema::{Feature, FeatureSchema};
