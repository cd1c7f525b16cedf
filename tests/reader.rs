use std::path::PathBuf;
use std::sync::Arc;

use catbayes::prelude::*;

fn schema() -> Arc<FeatureSchema> {
    let schema = FeatureSchema::new(
        ["no".to_string(), "yes".to_string()],
        [
            ("color".to_string(), vec!["red".into(), "blue".into()]),
            ("size".to_string(), vec!["small".into(), "large".into()]),
        ],
    ).unwrap();
    Arc::new(schema)
}

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn reads_a_training_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,yes,red,small\n\
        2,no,blue,large\n\
    ");

    let sample = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (2, 2));
    assert_eq!(sample[0].id(), "1");
    assert_eq!(sample[0].label(), Some("yes"));
    assert_eq!(sample[0].values(), &["red".to_string(), "small".to_string()]);
    assert_eq!(sample[1].label(), Some("no"));
}

#[test]
fn header_columns_may_be_reordered() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,size,color\n\
        1,yes,small,red\n\
    ");

    let sample = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read()
        .unwrap();

    // Values come back in schema order, not file order.
    assert_eq!(sample[0].values(), &["red".to_string(), "small".to_string()]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id, class, color, size\n\
        1, yes, red , small\n\
    ");

    let sample = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read()
        .unwrap();
    assert_eq!(sample[0].values(), &["red".to_string(), "small".to_string()]);
}

#[test]
fn strict_read_rejects_out_of_domain_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,yes,green,small\n\
    ");

    let result = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::CategoryViolation { .. })));
}

#[test]
fn strict_read_rejects_unknown_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,maybe,red,small\n\
    ");

    let result = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::UnknownClass { .. })));
}

#[test]
fn lenient_read_defers_domain_checks_to_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let schema = schema();

    let train = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,yes,red,small\n\
        2,no,blue,large\n\
    ");
    let test = write_csv(&dir, "test.csv", "\
        id,class,color,size\n\
        1,yes,red,small\n\
        2,no,green,large\n\
    ");

    let train = SampleReader::new()
        .file(&train)
        .schema(Arc::clone(&schema))
        .read()
        .unwrap();
    let model = NaiveBayes::new().fit(&train).unwrap();

    let test = SampleReader::new()
        .file(&test)
        .schema(Arc::clone(&schema))
        .strict(false)
        .read()
        .unwrap();
    let evaluation = evaluate(&model, &test).unwrap();

    // The out-of-vocabulary record is flagged, not fatal.
    assert_eq!(evaluation.n_evaluated(), 1);
    assert_eq!(evaluation.n_skipped(), 1);
}

#[test]
fn short_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,yes,red\n\
    ");

    let result = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::IncompleteRecord { .. })));
}

#[test]
fn header_must_cover_the_schema() {
    let dir = tempfile::tempdir().unwrap();

    let missing = write_csv(&dir, "missing.csv", "\
        id,class,color\n\
        1,yes,red\n\
    ");
    let result = SampleReader::new()
        .file(&missing)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::Schema(_))));

    let unknown = write_csv(&dir, "unknown.csv", "\
        id,class,color,weight\n\
        1,yes,red,heavy\n\
    ");
    let result = SampleReader::new()
        .file(&unknown)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::UnknownFeature { .. })));
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "");

    let result = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read();
    assert!(matches!(result, Err(Error::Schema(_))));
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "train.csv", "\
        id,class,color,size\n\
        1,yes,red,small\n\
        \n\
        2,no,blue,large\n\
    ");

    let sample = SampleReader::new()
        .file(&path)
        .schema(schema())
        .read()
        .unwrap();
    assert_eq!(sample.shape(), (2, 2));
}
