use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::FeatureSchema;

/// One observation: an identifier, an optional class label,
/// and one categorical value per schema feature.
///
/// Values are stored in schema feature order. A record holds raw
/// strings; whether they lie inside the permitted domains is checked
/// by the trainer (which rejects violations) and by the classifier
/// (which fails the single prediction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    label: Option<String>,
    values: Vec<String>,
}

impl Record {
    /// Construct a record whose `values` are already in schema
    /// feature order. Callers that hold name/value pairs should use
    /// [`Record::from_pairs`] instead.
    pub fn new(id: String, label: Option<String>, values: Vec<String>)
        -> Self
    {
        Self { id, label, values }
    }

    /// Construct a record from `(feature name, value)` pairs,
    /// reordering them to match `schema`.
    ///
    /// Fails with [`Error::UnknownFeature`] on a name the schema does
    /// not declare and with [`Error::IncompleteRecord`] unless every
    /// schema feature receives exactly one value.
    pub fn from_pairs<S, T>(
        schema: &FeatureSchema,
        id: S,
        label: Option<S>,
        pairs: &[(T, T)],
    ) -> Result<Self>
        where S: ToString,
              T: AsRef<str>,
    {
        let id = id.to_string();
        let n_features = schema.n_features();

        let mut values = vec![None::<String>; n_features];
        for (name, value) in pairs {
            let index = schema.feature_index(name.as_ref())?;
            if values[index].replace(value.as_ref().to_string()).is_some() {
                return Err(Error::IncompleteRecord {
                    id,
                    expected: n_features,
                    got: pairs.len(),
                });
            }
        }

        let got = values.iter().filter(|v| v.is_some()).count();
        let values = values.into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or(Error::IncompleteRecord {
                id: id.clone(),
                expected: n_features,
                got,
            })?;

        let label = label.map(|l| l.to_string());
        Ok(Self { id, label, values })
    }

    /// The record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The class label, if this record carries one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The value of the `index`-th schema feature.
    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// All values, in schema feature order.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }
}
