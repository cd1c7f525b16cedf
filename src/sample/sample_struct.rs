use std::ops::Index;
use std::slice::Iter;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::FeatureSchema;
use super::record::Record;

/// Struct `Sample` holds a batch of records bound to the schema
/// they were read against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    schema: Arc<FeatureSchema>,
    records: Vec<Record>,
}

impl Sample {
    /// Bind `records` to `schema`.
    ///
    /// Every record must supply exactly one value per schema feature;
    /// otherwise this fails with [`Error::IncompleteRecord`].
    /// Value domains are *not* checked here — the trainer rejects
    /// out-of-domain values and the classifier fails per record,
    /// so evaluation data may legally contain them.
    pub fn from_records(
        schema: Arc<FeatureSchema>,
        records: Vec<Record>,
    ) -> Result<Self>
    {
        let n_features = schema.n_features();
        for record in &records {
            let got = record.values().len();
            if got != n_features {
                return Err(Error::IncompleteRecord {
                    id: record.id().to_string(),
                    expected: n_features,
                    got,
                });
            }
        }
        Ok(Self { schema, records })
    }

    /// The schema this sample was read against.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// A shared handle to the schema.
    pub fn schema_arc(&self) -> Arc<FeatureSchema> {
        Arc::clone(&self.schema)
    }

    /// The records of this sample.
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the pair of the number of records and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.schema.n_features())
    }

    /// Returns `true` if this sample has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that every value of every record lies inside its
    /// feature's permitted domain, and that every label belongs to
    /// the configured class set.
    ///
    /// The first violation is reported as [`Error::CategoryViolation`],
    /// [`Error::UnknownClass`], or [`Error::UnlabeledRecord`].
    /// Records without labels only fail when `require_labels` is set.
    pub fn validate(&self, require_labels: bool) -> Result<()> {
        for record in &self.records {
            match record.label() {
                Some(label) => {
                    if self.schema.class_index(label).is_none() {
                        return Err(Error::UnknownClass {
                            label: label.to_string(),
                        });
                    }
                }
                None if require_labels => {
                    return Err(Error::UnlabeledRecord {
                        id: record.id().to_string(),
                    });
                }
                None => {}
            }

            for (feature, value) in
                self.schema.features().iter().zip(record.values())
            {
                if feature.value_index(value).is_none() {
                    return Err(Error::CategoryViolation {
                        id: record.id().to_string(),
                        feature: feature.name().to_string(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Index<usize> for Sample {
    type Output = Record;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
