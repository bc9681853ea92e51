use clap::Parser;
use std::path::PathBuf;
use std::process;

use sortscale_metrics::{analyze, select_problem_size, MetricsTable, ScalingSeries, SelectionError};
use sortscale_report::{export, loader};

#[derive(Parser)]
#[command(name = "sortscale-report", about = "Strong-scaling report for parallel sort benchmark runs")]
struct Args {
    /// CSV file of benchmark runs
    #[arg(long, default_value = "metrics.csv")]
    input: PathBuf,

    /// Problem size to analyze; defaults to the largest observed
    #[arg(long)]
    problem_size: Option<u64>,

    /// Column holding the measured phase duration in seconds
    #[arg(long, default_value = "sort_time")]
    time_column: String,

    /// Directory receiving the curve files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    let args = Args::parse();

    let rows = loader::read_rows(&args.input, &args.time_column).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", args.input.display());
        process::exit(2);
    });

    let table = MetricsTable::load(rows).unwrap_or_else(|e| {
        eprintln!("Invalid input in {}: {e}", args.input.display());
        process::exit(2);
    });

    let n = select_problem_size(&table, args.problem_size).unwrap_or_else(|e| {
        eprintln!("{e}");
        if matches!(e, SelectionError::UnknownProblemSize(_)) {
            let sizes: Vec<String> = table.distinct_n().iter().map(u64::to_string).collect();
            eprintln!("Problem sizes present: {}", sizes.join(", "));
        }
        process::exit(1);
    });

    let series = analyze(&table, n).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let written = export::write_curves(&series, &args.out_dir).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(2);
    });

    print_report(&args, &series, &written);
}

fn print_report(args: &Args, series: &ScalingSeries, written: &[PathBuf]) {
    // analyze guarantees at least one point, so the baseline row exists.
    let baseline = &series.points[0];

    println!("Strong Scaling Report");
    println!("=====================");
    println!("Input:          {}", args.input.display());
    println!("Time column:    {}", args.time_column);
    println!("Problem size:   {}", series.n);
    println!("Baseline:       p={} ({:.3} s)", series.baseline_p, baseline.time);
    println!();
    println!("{:>8}  {:>12}  {:>10}  {:>12}", "p", "time (s)", "speedup", "efficiency");
    for point in &series.points {
        println!(
            "{:>8}  {:>12.3}  {:>10.3}  {:>12.3}",
            point.p, point.time, point.speedup, point.efficiency,
        );
    }
    println!();
    for path in written {
        println!("Wrote {}", path.display());
    }
}
