use serde::{Deserialize, Serialize};

use crate::table::MetricsTable;
use crate::{InsufficientDataError, SelectionError};

/// One derived point of a strong-scaling series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingPoint {
    pub p: u64,
    /// Measured wall-clock seconds at this worker count.
    pub time: f64,
    /// Baseline time divided by this point's time.
    /// `+inf` for a zero-duration run, never NaN.
    pub speedup: f64,
    /// Speedup divided by `p`; 1.0 is ideal linear scaling.
    pub efficiency: f64,
}

/// Strong-scaling series for one fixed problem size.
///
/// A value derived from a [`MetricsTable`]; holds no reference back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingSeries {
    /// The problem size this series describes.
    pub n: u64,
    /// Worker count of the speedup reference: the minimum `p` present for
    /// this `n`, which need not be 1.
    pub baseline_p: u64,
    /// Points sorted ascending by `p`, one per distinct worker count.
    pub points: Vec<ScalingPoint>,
}

impl ScalingSeries {
    /// The shared x-axis handed to the plotting collaborator.
    pub fn worker_counts(&self) -> Vec<u64> {
        self.points.iter().map(|pt| pt.p).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.time).collect()
    }

    pub fn speedups(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.speedup).collect()
    }

    pub fn efficiencies(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.efficiency).collect()
    }

    pub fn time_title(&self) -> String {
        format!("Strong scaling (n={})", self.n)
    }

    pub fn speedup_title(&self) -> String {
        format!("Speedup (n={})", self.n)
    }

    pub fn efficiency_title(&self) -> String {
        format!("Efficiency (n={})", self.n)
    }
}

/// Resolve the problem size to analyze.
///
/// `Some(n)` must name a size present in the table; `None` selects the
/// largest observed size. Fails with [`SelectionError::EmptyTable`] when the
/// table holds no observations at all.
pub fn select_problem_size(
    table: &MetricsTable,
    requested: Option<u64>,
) -> Result<u64, SelectionError> {
    let sizes = table.distinct_n();
    match requested {
        Some(n) if sizes.contains(&n) => Ok(n),
        Some(n) => Err(SelectionError::UnknownProblemSize(n)),
        None => sizes.last().copied().ok_or(SelectionError::EmptyTable),
    }
}

/// Derive the strong-scaling series for problem size `n`.
///
/// Observations are stable-sorted by `p` ascending; when two runs share the
/// same `p`, the one loaded first wins and the rest are discarded, so the
/// result does not depend on incidental iteration order. The baseline is the
/// entry with the minimum `p` present.
///
/// A single matching observation is a valid one-point series (self-baseline,
/// speedup 1, efficiency 1/p); only zero matching observations fail.
pub fn analyze(table: &MetricsTable, n: u64) -> Result<ScalingSeries, InsufficientDataError> {
    let mut rows = table.filter_by_n(n);
    rows.sort_by_key(|o| o.p);
    rows.dedup_by_key(|o| o.p);

    let baseline = rows.first().copied().ok_or(InsufficientDataError { n })?;
    let t1 = baseline.time;

    let points = rows
        .iter()
        .map(|o| {
            // A zero-duration run is a representable measurement: it maps to
            // an infinite speedup instead of a division error, and a
            // zero-time baseline never produces 0/0 = NaN.
            let speedup = if o.time == 0.0 { f64::INFINITY } else { t1 / o.time };
            ScalingPoint {
                p: o.p,
                time: o.time,
                speedup,
                efficiency: speedup / o.p as f64,
            }
        })
        .collect();

    Ok(ScalingSeries { n, baseline_p: baseline.p, points })
}
