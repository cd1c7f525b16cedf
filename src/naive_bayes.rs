//! The naive Bayes trainer and the model it produces.

mod model;
mod trainer;

pub use model::NaiveBayesModel;
pub use trainer::NaiveBayes;
