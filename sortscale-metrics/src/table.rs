use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::SchemaError;

/// One row as delivered by an input adapter, before validation.
///
/// `None` marks a field the source did not supply. Adapters parse text into
/// numbers; presence and range checks belong to [`MetricsTable::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawRow {
    pub n: Option<i64>,
    pub p: Option<i64>,
    pub time: Option<f64>,
}

/// One validated benchmark measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Total problem size (elements sorted).
    pub n: u64,
    /// Number of parallel workers/ranks used for the run.
    pub p: u64,
    /// Wall-clock seconds of the measured sort phase (excludes gather and I/O).
    pub time: f64,
}

/// Read-only collection of validated observations, in load order.
///
/// Constructed once per analysis run; exposes no mutation after load.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    rows: Vec<Observation>,
}

impl MetricsTable {
    /// Validate `rows` and build a table.
    ///
    /// Fails on the first row with a missing field, a non-positive `n` or
    /// `p`, or a negative or non-finite time. A NaN time would otherwise
    /// surface in the derived series, which must never carry NaN.
    pub fn load(rows: impl IntoIterator<Item = RawRow>) -> Result<Self, SchemaError> {
        let mut validated = Vec::new();
        for (row, raw) in rows.into_iter().enumerate() {
            let n = raw.n.ok_or(SchemaError::MissingField { row, field: "n" })?;
            let p = raw.p.ok_or(SchemaError::MissingField { row, field: "p" })?;
            let time = raw.time.ok_or(SchemaError::MissingField { row, field: "time" })?;

            if n <= 0 {
                return Err(SchemaError::NonPositive { row, field: "n", value: n });
            }
            if p <= 0 {
                return Err(SchemaError::NonPositive { row, field: "p", value: p });
            }
            if !time.is_finite() || time < 0.0 {
                return Err(SchemaError::InvalidTime { row, value: time });
            }

            validated.push(Observation { n: n as u64, p: p as u64, time });
        }
        Ok(MetricsTable { rows: validated })
    }

    /// Problem sizes present in the table, sorted ascending.
    pub fn distinct_n(&self) -> BTreeSet<u64> {
        self.rows.iter().map(|o| o.n).collect()
    }

    /// Observations with the given problem size, in load order.
    /// The caller is responsible for sorting.
    pub fn filter_by_n(&self, n: u64) -> Vec<Observation> {
        self.rows.iter().copied().filter(|o| o.n == n).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
