//! The feature catalog: which features exist, which categorical values
//! each feature permits, and the fixed set of class labels.
//!
//! A [`FeatureSchema`] is configuration, not something inferred from data.
//! It is constructed once, before any training, and queried thereafter;
//! both the trainer and the trained model hold it immutably.
//!
//! Schemas can be built in code via [`FeatureSchema::new`] or loaded from
//! a JSON document of the following form:
//! ```json
//! {
//!     "classes": ["no", "yes"],
//!     "features": [
//!         { "name": "color", "values": ["red", "green", "blue"] }
//!     ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One categorical feature: a name and its closed value domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    values: Vec<String>,
    value_to_index: HashMap<String, usize>,
}

impl Feature {
    fn new(name: String, values: Vec<String>) -> Result<Self> {
        if values.is_empty() {
            let msg = format!("feature `{name}` has an empty value domain");
            return Err(Error::Schema(msg));
        }
        let mut value_to_index = HashMap::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            if value_to_index.insert(value.clone(), i).is_some() {
                let msg = format!(
                    "feature `{name}` lists the value `{value}` twice"
                );
                return Err(Error::Schema(msg));
            }
        }
        Ok(Self { name, values, value_to_index })
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The permitted values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }

    /// The number of permitted values.
    pub fn n_values(&self) -> usize {
        self.values.len()
    }

    /// Position of `value` in the domain, or `None` if it is not permitted.
    pub fn value_index(&self, value: &str) -> Option<usize> {
        self.value_to_index.get(value).copied()
    }
}

/// The fixed catalog of features, their value domains,
/// and the class-label set.
///
/// Class labels are held sorted lexicographically; this order is what
/// makes the arg-max tie-break of
/// [`NaiveBayesModel::predict`](crate::NaiveBayesModel) deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSchema", into = "RawSchema")]
pub struct FeatureSchema {
    classes: Vec<String>,
    class_to_index: HashMap<String, usize>,
    features: Vec<Feature>,
    name_to_index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Construct a schema from a class-label set and
    /// `(feature name, permitted values)` pairs.
    ///
    /// Fails with [`Error::Schema`] when the label set or a value domain
    /// is empty, or when a label, feature name, or value is duplicated.
    pub fn new<C, F>(classes: C, features: F) -> Result<Self>
        where C: IntoIterator<Item = String>,
              F: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut classes = classes.into_iter().collect::<Vec<_>>();
        if classes.is_empty() {
            return Err(Error::Schema("the class-label set is empty".into()));
        }
        classes.sort();

        let mut class_to_index = HashMap::with_capacity(classes.len());
        for (i, label) in classes.iter().enumerate() {
            if class_to_index.insert(label.clone(), i).is_some() {
                let msg = format!("the class label `{label}` appears twice");
                return Err(Error::Schema(msg));
            }
        }

        let features = features.into_iter()
            .map(|(name, values)| Feature::new(name, values))
            .collect::<Result<Vec<_>>>()?;
        if features.is_empty() {
            return Err(Error::Schema("the schema has no features".into()));
        }

        let mut name_to_index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            let name = feature.name().to_string();
            if name_to_index.insert(name, i).is_some() {
                let msg = format!(
                    "the feature `{}` is declared twice", feature.name()
                );
                return Err(Error::Schema(msg));
            }
        }

        Ok(Self { classes, class_to_index, features, name_to_index })
    }

    /// Parse a schema from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let schema = serde_json::from_str::<Self>(text)?;
        Ok(schema)
    }

    /// Read a schema from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The features, in declaration order.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// The number of features.
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// The class labels, sorted lexicographically.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }

    /// The number of class labels.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Position of `label` in the (sorted) class-label set.
    pub fn class_index(&self, label: &str) -> Option<usize> {
        self.class_to_index.get(label).copied()
    }

    /// Position of the feature named `name`.
    /// Fails with [`Error::UnknownFeature`] if no such feature exists.
    pub fn feature_index(&self, name: &str) -> Result<usize> {
        self.name_to_index.get(name)
            .copied()
            .ok_or_else(|| Error::UnknownFeature { name: name.into() })
    }

    /// The feature named `name`.
    /// Fails with [`Error::UnknownFeature`] if no such feature exists.
    pub fn feature(&self, name: &str) -> Result<&Feature> {
        let index = self.feature_index(name)?;
        Ok(&self.features[index])
    }

    /// The permitted values of the feature named `name`.
    /// Fails with [`Error::UnknownFeature`] if no such feature exists.
    pub fn values_of(&self, name: &str) -> Result<&[String]> {
        self.feature(name).map(Feature::values)
    }

    /// Returns `true` if `value` is permitted for the feature
    /// named `name`. An unknown feature name yields `false`.
    pub fn is_valid(&self, name: &str, value: &str) -> bool {
        self.feature(name)
            .map(|feature| feature.value_index(value).is_some())
            .unwrap_or(false)
    }
}

/// The on-disk shape of a schema. Kept separate from [`FeatureSchema`]
/// so that the lookup tables are rebuilt and validated on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSchema {
    classes: Vec<String>,
    features: Vec<RawFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawFeature {
    name: String,
    values: Vec<String>,
}

impl TryFrom<RawSchema> for FeatureSchema {
    type Error = Error;

    fn try_from(raw: RawSchema) -> Result<Self> {
        let features = raw.features.into_iter()
            .map(|f| (f.name, f.values));
        Self::new(raw.classes, features)
    }
}

impl From<FeatureSchema> for RawSchema {
    fn from(schema: FeatureSchema) -> Self {
        let classes = schema.classes;
        let features = schema.features.into_iter()
            .map(|f| RawFeature { name: f.name, values: f.values })
            .collect();
        Self { classes, features }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_schema() -> FeatureSchema {
        FeatureSchema::new(
            ["Y".to_string(), "X".to_string()],
            [
                ("color".to_string(),
                 vec!["red".into(), "green".into(), "blue".into()]),
                ("size".to_string(),
                 vec!["small".into(), "large".into()]),
            ],
        ).unwrap()
    }

    #[test]
    fn classes_are_sorted() {
        let schema = toy_schema();
        assert_eq!(schema.classes(), &["X".to_string(), "Y".to_string()]);
        assert_eq!(schema.class_index("X"), Some(0));
        assert_eq!(schema.class_index("Z"), None);
    }

    #[test]
    fn membership_queries() {
        let schema = toy_schema();
        assert!(schema.is_valid("color", "green"));
        assert!(!schema.is_valid("color", "purple"));
        assert!(!schema.is_valid("weight", "small"));

        let values = schema.values_of("size").unwrap();
        assert_eq!(values, &["small".to_string(), "large".to_string()]);
        assert!(matches!(
            schema.values_of("weight"),
            Err(Error::UnknownFeature { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_feature() {
        let result = FeatureSchema::new(
            ["X".to_string()],
            [
                ("color".to_string(), vec!["red".into()]),
                ("color".to_string(), vec!["blue".into()]),
            ],
        );
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn rejects_empty_domain() {
        let result = FeatureSchema::new(
            ["X".to_string()],
            [("color".to_string(), Vec::new())],
        );
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn json_roundtrip() {
        let schema = toy_schema();
        let text = serde_json::to_string(&schema).unwrap();
        let parsed = FeatureSchema::from_json_str(&text).unwrap();
        assert_eq!(schema, parsed);
    }

    #[test]
    fn json_rejects_duplicate_value() {
        let text = r#"{
            "classes": ["X"],
            "features": [
                { "name": "color", "values": ["red", "red"] }
            ]
        }"#;
        assert!(FeatureSchema::from_json_str(text).is_err());
    }
}
