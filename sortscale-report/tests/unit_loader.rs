use std::io::Write;

use sortscale_metrics::{RawRow, SchemaError};
use sortscale_report::loader::read_rows;
use sortscale_report::ReportError;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_rows_benchmark_schema() {
    // Full schema as the benchmark writes it; extra columns are ignored.
    let file = write_csv(
        "run_id,n,p,sort_time,gather_time,io_time,correct\n\
         1,100,1,10.0,0.5,1.2,1\n\
         2,100,2,6.0,0.4,1.1,1\n",
    );

    let rows = read_rows(file.path(), "sort_time").unwrap();
    assert_eq!(
        rows,
        vec![
            RawRow { n: Some(100), p: Some(1), time: Some(10.0) },
            RawRow { n: Some(100), p: Some(2), time: Some(6.0) },
        ]
    );
}

#[test]
fn test_read_rows_alternate_time_column() {
    let file = write_csv(
        "run_id,n,p,sort_time,gather_time,io_time,correct\n\
         1,100,1,10.0,0.5,1.2,1\n\
         2,100,2,6.0,0.4,1.1,1\n",
    );

    let rows = read_rows(file.path(), "gather_time").unwrap();
    assert_eq!(rows[0].time, Some(0.5));
    assert_eq!(rows[1].time, Some(0.4));
}

#[test]
fn test_read_rows_minimal_schema() {
    let file = write_csv("n,p,sort_time\n100,1,10.0\n");
    let rows = read_rows(file.path(), "sort_time").unwrap();
    assert_eq!(rows, vec![RawRow { n: Some(100), p: Some(1), time: Some(10.0) }]);
}

#[test]
fn test_read_rows_missing_column() {
    let file = write_csv("run_id,n,p\n1,100,1\n");
    let err = read_rows(file.path(), "sort_time").unwrap_err();

    assert!(matches!(
        err,
        ReportError::Schema(SchemaError::MissingColumn(ref c)) if c == "sort_time"
    ));
}

#[test]
fn test_read_rows_non_numeric_cell_names_row_and_field() {
    let file = write_csv("n,p,sort_time\n100,1,10.0\nabc,2,6.0\n");
    let err = read_rows(file.path(), "sort_time").unwrap_err();

    match err {
        ReportError::Schema(SchemaError::NotNumeric { row, field, value }) => {
            assert_eq!(row, 1);
            assert_eq!(field, "n");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_read_rows_fractional_worker_count_is_rejected() {
    let file = write_csv("n,p,sort_time\n100,1.5,10.0\n");
    let err = read_rows(file.path(), "sort_time").unwrap_err();
    assert!(matches!(
        err,
        ReportError::Schema(SchemaError::NotNumeric { row: 0, ref field, .. }) if field == "p"
    ));
}

#[test]
fn test_read_rows_empty_cell_becomes_none() {
    // Presence validation belongs to MetricsTable::load, not the loader.
    let file = write_csv("n,p,sort_time\n,2,1.0\n");
    let rows = read_rows(file.path(), "sort_time").unwrap();
    assert_eq!(rows, vec![RawRow { n: None, p: Some(2), time: Some(1.0) }]);
}

#[test]
fn test_read_rows_missing_file() {
    let err = read_rows(std::path::Path::new("no_such_metrics.csv"), "sort_time").unwrap_err();
    assert!(matches!(err, ReportError::Csv(_)));
}
