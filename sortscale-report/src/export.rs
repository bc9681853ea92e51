use std::path::{Path, PathBuf};

use sortscale_metrics::ScalingSeries;

use crate::ReportError;

pub const TIME_CURVE_FILE: &str = "strong_scaling_time.dat";
pub const SPEEDUP_CURVE_FILE: &str = "strong_scaling_speedup.dat";
pub const EFFICIENCY_CURVE_FILE: &str = "strong_scaling_efficiency.dat";

/// One curve handed to the plotting collaborator: a title plus parallel
/// `p`/value sequences. Axis labels, markers, grid, and image output are the
/// collaborator's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub title: String,
    pub p: Vec<u64>,
    pub values: Vec<f64>,
}

impl Curve {
    pub fn time(series: &ScalingSeries) -> Curve {
        Curve {
            title: series.time_title(),
            p: series.worker_counts(),
            values: series.times(),
        }
    }

    pub fn speedup(series: &ScalingSeries) -> Curve {
        Curve {
            title: series.speedup_title(),
            p: series.worker_counts(),
            values: series.speedups(),
        }
    }

    pub fn efficiency(series: &ScalingSeries) -> Curve {
        Curve {
            title: series.efficiency_title(),
            p: series.worker_counts(),
            values: series.efficiencies(),
        }
    }

    /// Render as whitespace-delimited `p value` lines under a `# title`
    /// header. An infinite value prints as `inf`; NaN never reaches here.
    pub fn to_dat(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        for (p, value) in self.p.iter().zip(&self.values) {
            out.push_str(&format!("{} {}\n", p, value));
        }
        out
    }
}

/// Write the three curve files for `series` into `out_dir`.
/// Returns the paths written, in time/speedup/efficiency order.
pub fn write_curves(series: &ScalingSeries, out_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let curves = [
        (TIME_CURVE_FILE, Curve::time(series)),
        (SPEEDUP_CURVE_FILE, Curve::speedup(series)),
        (EFFICIENCY_CURVE_FILE, Curve::efficiency(series)),
    ];

    let mut written = Vec::new();
    for (file_name, curve) in curves {
        let path = out_dir.join(file_name);
        std::fs::write(&path, curve.to_dat()).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }
    Ok(written)
}
