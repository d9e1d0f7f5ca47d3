use anyhow::{Context, Result};
use clap::Parser;

use first_passage::analysis::summarize_matrix_with;
use first_passage::config::ANALYSIS;
#[allow(unused_imports)]
use first_passage::config::DEBUG_FLAGS;
use first_passage::data::{MatrixFile, load_series, save_reports};
use first_passage::{Analyzer, Cli, ThresholdSet};

fn main() -> Result<()> {
    // Info by default; RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    run(&args)
}

fn run(args: &Cli) -> Result<()> {
    // Validate thresholds before touching the series so bad config fails fast
    let thresholds = ThresholdSet::new(args.threshold_values())
        .context("Invalid threshold configuration")?;

    let mut series = load_series(&args.input)?;
    if let Some(limit) = args.limit {
        series = series.prefix(limit)?;
    }
    let (low, high) = series.min_max();
    log::info!(
        "Loaded {} samples from {:?} (range {:.4} .. {:.4})",
        series.len(),
        args.input,
        low,
        high
    );

    let analyzer = Analyzer::new(series, args.build_options())?;
    let matrix = analyzer.waiting_times(&thresholds);
    log::info!(
        "Computed {} rows x {} samples ({} index)",
        matrix.len(),
        matrix.series_len(),
        args.index
    );

    let reports = summarize_matrix_with(
        &matrix,
        args.step_seconds,
        args.bins,
        ANALYSIS.report.tail_percentile,
    );
    for report in &reports {
        let summary = &report.summary;
        match &summary.waiting_secs {
            Some(stats) => log::info!(
                "{} by {}: reached {}/{} ({:.1}%), median {:.0}s, p{} {:.0}s, max {:.0}s",
                report.key.direction,
                report.key.threshold,
                summary.reached,
                summary.reached + summary.unreachable,
                summary.reached_fraction() * 100.0,
                stats.median,
                ANALYSIS.report.tail_percentile,
                stats.tail,
                stats.max,
            ),
            None => log::warn!(
                "{} by {}: never reached in {} samples",
                report.key.direction,
                report.key.threshold,
                summary.unreachable,
            ),
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_row_summaries {
            log::debug!("{:?}", summary);
        }
    }

    let matrix_paths = args.matrix_paths();
    if !matrix_paths.is_empty() {
        let matrix_file = MatrixFile::new(args.step_seconds, matrix);
        for path in &matrix_paths {
            matrix_file.save_to_path(path)?;
            log::info!("Matrix written to {:?}", path);
        }
    }

    if let Some(path) = &args.report {
        save_reports(path, &reports)?;
        log::info!("Report written to {:?}", path);
    }

    Ok(())
}
