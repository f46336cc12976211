use std::time::Instant;

use contig_stats::batch::{process_assembly, process_batch, render_batch};
use contig_stats::error::Result;
use contig_stats::report::{ReportFormatter, ReportStyle};
use contig_stats::stats::{MilestonePolicy, StatsConfig};
use tracing::{info, warn};

pub fn run(
    assemblies: &[String],
    min_length: u64,
    genome_size: u64,
    baylor: bool,
    style: ReportStyle,
    title: Option<&str>,
) -> Result<()> {
    let config = StatsConfig {
        min_length,
        genome_size,
        milestones: if baylor {
            MilestonePolicy::Baylor
        } else {
            MilestonePolicy::Standard
        },
    };
    info!(
        "Calculating statistics for {} assemblies (min length {}, genome size {})",
        assemblies.len(),
        min_length,
        genome_size
    );
    let start = Instant::now();

    let reports = match (title, assemblies) {
        (Some(title), [single]) => vec![process_assembly(single, Some(title), &config)?],
        (Some(_), _) => {
            warn!("--title is ignored when more than one assembly is given");
            process_batch(assemblies, &config)?
        }
        (None, _) => process_batch(assemblies, &config)?,
    };

    for text in render_batch(&reports, &ReportFormatter::new(style))? {
        println!("{}", text);
    }

    info!("Statistics completed in {:.2}s", start.elapsed().as_secs_f32());
    Ok(())
}
