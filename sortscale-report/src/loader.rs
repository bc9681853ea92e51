use std::path::Path;

use sortscale_metrics::{RawRow, SchemaError};

use crate::ReportError;

/// Read benchmark rows from the CSV file at `path`.
///
/// The file must carry a header naming at least `n`, `p`, and `time_column`;
/// every other column (`run_id`, `correct`, ...) is ignored. Cells are parsed
/// here, but presence and range checks belong to `MetricsTable::load`, so an
/// empty cell becomes `None` rather than an error. Rows come back in file
/// order, keeping load-time row indices aligned with data-row positions.
pub fn read_rows(path: &Path, time_column: &str) -> Result<Vec<RawRow>, ReportError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let n_idx = column_index(&headers, "n")?;
    let p_idx = column_index(&headers, "p")?;
    let time_idx = column_index(&headers, time_column)?;

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        rows.push(RawRow {
            n: parse_integer(&record, row, n_idx, "n")?,
            p: parse_integer(&record, row, p_idx, "p")?,
            time: parse_seconds(&record, row, time_idx, time_column)?,
        });
    }
    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, ReportError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()).into())
}

/// Cell text at `idx`, or `None` when the cell is absent or empty.
fn cell<'r>(record: &'r csv::StringRecord, idx: usize) -> Option<&'r str> {
    record.get(idx).map(str::trim).filter(|c| !c.is_empty())
}

fn parse_integer(
    record: &csv::StringRecord,
    row: usize,
    idx: usize,
    field: &str,
) -> Result<Option<i64>, ReportError> {
    let Some(text) = cell(record, idx) else {
        return Ok(None);
    };
    text.parse::<i64>().map(Some).map_err(|_| {
        SchemaError::NotNumeric {
            row,
            field: field.to_string(),
            value: text.to_string(),
        }
        .into()
    })
}

fn parse_seconds(
    record: &csv::StringRecord,
    row: usize,
    idx: usize,
    field: &str,
) -> Result<Option<f64>, ReportError> {
    let Some(text) = cell(record, idx) else {
        return Ok(None);
    };
    text.parse::<f64>().map(Some).map_err(|_| {
        SchemaError::NotNumeric {
            row,
            field: field.to_string(),
            value: text.to_string(),
        }
        .into()
    })
}
