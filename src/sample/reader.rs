use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::constants::BUFFER_SIZE;
use crate::error::{Error, Result};
use crate::schema::FeatureSchema;
use super::record::Record;
use super::sample_struct::Sample;

/// A struct that returns [`Sample`].
/// Using this struct, one can read a comma-separated file to [`Sample`].
///
/// The expected layout is one header line
/// `id,label,feature_1,...,feature_k` followed by one record per line.
/// The header's feature columns are matched against the schema by name,
/// in any order; every schema feature must appear exactly once.
///
/// # Example
/// The following code reads a training file.
/// ```no_run
/// use std::sync::Arc;
/// use catbayes::prelude::*;
///
/// # fn main() -> catbayes::Result<()> {
/// # let schema = FeatureSchema::new(
/// #     ["X".to_string()],
/// #     [("f".to_string(), vec!["a".into()])],
/// # )?;
/// let schema = Arc::new(schema);
/// let sample = SampleReader::new()
///     .file("/path/to/train.csv")
///     .schema(Arc::clone(&schema))
///     .read()?;
/// # Ok(())
/// # }
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    schema: Option<Arc<FeatureSchema>>,
    strict: bool,
}

impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            schema: None,
            strict: true,
        }
    }

    /// Set the schema the records are read against.
    pub fn schema(mut self, schema: Arc<FeatureSchema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Set whether value domains and labels are checked at read time.
    /// Default is `true`, which is what training data wants; pass
    /// `false` for evaluation data so that out-of-vocabulary records
    /// surface as per-record prediction failures instead of aborting
    /// the load.
    pub fn strict(mut self, flag: bool) -> Self {
        self.strict = flag;
        self
    }
}

impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>,
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments and returns a [`Sample`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .expect("The file name is not set. Use `SampleReader::file`");
        let schema = self.schema
            .expect("The schema is not set. Use `SampleReader::schema`");

        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::Schema(
                    "the data file has no header line".into()
                ));
            }
        };
        let column_to_feature = parse_header(&schema, &header)?;

        let n_features = schema.n_features();
        let mut records = Vec::with_capacity(BUFFER_SIZE);
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let columns = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();
            let id = columns[0].to_string();
            if columns.len() != n_features + 2 {
                return Err(Error::IncompleteRecord {
                    id,
                    expected: n_features,
                    got: columns.len().saturating_sub(2),
                });
            }

            let label = match columns[1] {
                "" => None,
                label => Some(label.to_string()),
            };

            let mut values = vec![String::new(); n_features];
            for (column, value) in columns[2..].iter().enumerate() {
                values[column_to_feature[column]] = value.to_string();
            }

            records.push(Record::new(id, label, values));
        }

        let sample = Sample::from_records(schema, records)?;
        if self.strict {
            sample.validate(true)?;
        }
        Ok(sample)
    }
}

/// Map each feature column of the header to its schema feature index.
/// The first two columns (identifier and class label) are skipped.
fn parse_header(schema: &FeatureSchema, header: &str) -> Result<Vec<usize>> {
    let names = header.split(',')
        .map(str::trim)
        .skip(2)
        .collect::<Vec<_>>();

    let n_features = schema.n_features();
    if names.len() != n_features {
        let msg = format!(
            "the header declares {} feature columns \
             but the schema has {n_features} features",
            names.len(),
        );
        return Err(Error::Schema(msg));
    }

    let mut seen = vec![false; n_features];
    let mut column_to_feature = Vec::with_capacity(n_features);
    for name in names {
        let index = schema.feature_index(name)?;
        if seen[index] {
            let msg = format!("the header lists the feature `{name}` twice");
            return Err(Error::Schema(msg));
        }
        seen[index] = true;
        column_to_feature.push(index);
    }
    Ok(column_to_feature)
}
