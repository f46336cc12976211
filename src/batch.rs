//! Statistics for several assemblies at once.
//!
//! Assemblies share nothing, so each is loaded and scanned on its own rayon
//! task. Results come back in argument order.

use rayon::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::io::{assembly_title, load_assembly};
use crate::report::ReportFormatter;
use crate::stats::distribution::{compute, DistributionResult, StatsConfig};

#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub title: String,
    pub result: DistributionResult,
}

/// Load and summarise one assembly argument (one or more comma-separated files)
pub fn process_assembly(arg: &str, title: Option<&str>, config: &StatsConfig) -> Result<AssemblyReport> {
    let title = title.map_or_else(|| assembly_title(arg), str::to_string);
    let index = load_assembly(arg, false)?;
    let result = compute(&index, config)?;
    info!(
        "{}: {} sequences over {} bp, reference total {}",
        title, result.count, config.min_length, result.reference_total
    );
    Ok(AssemblyReport { title, result })
}

/// Process every argument in parallel. The first failure aborts the batch.
pub fn process_batch(args: &[String], config: &StatsConfig) -> Result<Vec<AssemblyReport>> {
    args.par_iter()
        .map(|arg| process_assembly(arg, None, config))
        .collect()
}

/// Render reports in order; only the first carries a header row
pub fn render_batch(reports: &[AssemblyReport], formatter: &ReportFormatter) -> Result<Vec<String>> {
    reports
        .iter()
        .enumerate()
        .map(|(i, report)| formatter.render(&report.title, &report.result, i == 0))
        .collect()
}
