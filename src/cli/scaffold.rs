use std::path::{Path, PathBuf};

use contig_stats::error::{Result, StatsError};
use contig_stats::io::fasta::FastaWriter;
use contig_stats::io::{load_assembly, open_input};
use contig_stats::scaffold::assemble_from_layout;
use tracing::info;

pub fn run(contigs: &str, layout: &str, output: Option<&str>) -> Result<()> {
    let index = load_assembly(contigs, true)?;
    let layout_path = Path::new(layout);
    let assembled = assemble_from_layout(&index, open_input(layout_path)?, layout_path)?;

    let (mut writer, out_path) = match output {
        Some(path) => (FastaWriter::create(Path::new(path))?, PathBuf::from(path)),
        None => (FastaWriter::stdout(), PathBuf::from("<stdout>")),
    };
    for scaffold in &assembled.scaffolds {
        writer
            .write_record(&format!("scaffold_{}", scaffold.id), &scaffold.sequence)
            .map_err(|e| StatsError::io(&out_path, e))?;
    }
    writer.finish().map_err(|e| StatsError::io(&out_path, e))?;

    info!(
        "Wrote {} scaffolds, negative gap total {}",
        assembled.scaffolds.len(),
        assembled.negative_gap_total
    );
    if output.is_some() {
        println!("NEGATIVE GAPS IS {}", assembled.negative_gap_total);
    }
    Ok(())
}
