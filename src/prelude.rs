//! Exports the schema, sample, training, and evaluation surface.
//!
pub use crate::schema::{
    Feature,
    FeatureSchema,
};

pub use crate::sample::{
    Record,
    Sample,
    SampleReader,
};

pub use crate::naive_bayes::{
    NaiveBayes,
    NaiveBayesModel,
};

pub use crate::classifier::{
    Classifier,
    Prediction,
};

pub use crate::evaluation::{
    evaluate,
    Evaluation,
    Outcome,
};

pub use crate::error::{
    Error,
    Result,
};
