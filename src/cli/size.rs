use std::path::Path;

use contig_stats::error::{Result, StatsError};
use contig_stats::io::posmap::{count_placed_reads_in, PosmapLayout};
use contig_stats::io::{fasta, fastq, load_assembly, open_input, InputKind};
use tracing::{info, warn};

/// Print `name<TAB>length` for every record of every input
pub fn run(inputs: &[String], ungapped: bool) -> Result<()> {
    for input in inputs {
        let path = Path::new(input);
        let reader = open_input(path)?;
        let sizes = match InputKind::from_path(path) {
            InputKind::Fastq => fastq::size_records(reader, path)?,
            InputKind::Fasta => fasta::size_records(reader, ungapped).map_err(|e| StatsError::io(path, e))?,
            InputKind::Lengths => {
                warn!("Skipping length table {}", path.display());
                continue;
            }
        };
        for size in sizes {
            println!("{}\t{}", size.name, size.length);
        }
    }
    Ok(())
}

pub fn count_reads(assembly: &str, posmap: &str, nb: bool) -> Result<()> {
    let index = load_assembly(assembly, false)?;
    let layout = if nb { PosmapLayout::Nb } else { PosmapLayout::Standard };
    let placed = count_placed_reads_in(Path::new(posmap), &index, layout)?;
    info!("{} placements on {} sequences", placed, index.len());
    println!("{}", placed);
    Ok(())
}
