//! Input loading and sequence output
pub mod fasta;
pub mod fastq;
pub mod lens;
pub mod posmap;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::info;

use crate::error::{Result, StatsError};
use crate::stats::index::LengthIndex;

/// Open a text input, decompressing `.gz` files transparently
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| StatsError::io(path, e))?;
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// FASTA records
    Fasta,
    /// FASTQ records, four lines each
    Fastq,
    /// Two-column `id length` table
    Lengths,
}

impl InputKind {
    /// Guess the input kind from the file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.contains("lens") {
            InputKind::Lengths
        } else if name.contains("fastq") || name.contains(".fq") {
            InputKind::Fastq
        } else {
            InputKind::Fasta
        }
    }
}

/// Load one assembly argument into a length index.
///
/// The argument may list several files separated by commas; they are merged
/// into one index. Length tables and FASTQ files are detected by name,
/// everything else is read as FASTA.
pub fn load_assembly(arg: &str, keep_content: bool) -> Result<LengthIndex> {
    let mut index = if keep_content {
        LengthIndex::with_content()
    } else {
        LengthIndex::new()
    };

    for part in arg.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let path = Path::new(part);
        let loaded = match InputKind::from_path(path) {
            InputKind::Lengths => lens::read_lengths(path)?,
            InputKind::Fastq => fastq::read_index(path)?,
            InputKind::Fasta => fasta::read_index(path, keep_content)?,
        };
        info!("Loaded {} sequences from {}", loaded.len(), path.display());
        index.extend(loaded);
    }

    Ok(index)
}

/// Report title for an assembly argument: its first path component
pub fn assembly_title(arg: &str) -> String {
    let trimmed = arg.trim();
    match trimmed.split('/').next() {
        Some(first) if !first.is_empty() => first.to_string(),
        _ => trimmed.to_string(),
    }
}
