//! Rebuild scaffold sequences from contigs and a layout of gap directives.
//!
//! A layout is a stream of lines such as
//!
//! ```text
//! supercontig 1
//! contig ctg7
//! gap 120
//! contig ctg9
//! gap -15
//! contig ctg12
//! ```
//!
//! A negative gap means the flanking contigs overlap, so that many bases are
//! removed from the end of the scaffold built so far.

use std::io::BufRead;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::io::fasta::{wrap_sequence, LINE_WIDTH};
use crate::stats::index::LengthIndex;

/// Filler base for positive gaps
pub const GAP_CHAR: u8 = b'N';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldDirective {
    Supercontig(String),
    ContigRef(String),
    Gap(i64),
}

impl ScaffoldDirective {
    /// Parse one layout line. Returns `None` for blank, unknown or malformed
    /// lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let tag = fields.next()?;
        let value = fields.next()?;

        if tag.eq_ignore_ascii_case("supercontig") {
            Some(ScaffoldDirective::Supercontig(value.to_string()))
        } else if tag.eq_ignore_ascii_case("contig") {
            Some(ScaffoldDirective::ContigRef(value.to_string()))
        } else if tag.eq_ignore_ascii_case("gap") {
            value.parse().ok().map(ScaffoldDirective::Gap)
        } else {
            None
        }
    }
}

/// Read a layout, skipping lines that do not parse
pub fn read_layout<R: BufRead>(reader: R) -> std::io::Result<Vec<ScaffoldDirective>> {
    let mut directives = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        match ScaffoldDirective::parse(&line) {
            Some(directive) => directives.push(directive),
            None => debug!("Skipping layout line {}: {:?}", line_no + 1, line),
        }
    }
    Ok(directives)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub id: String,
    pub sequence: String,
}

impl Scaffold {
    /// Sequence text broken into fixed-width lines
    pub fn wrapped(&self) -> String {
        wrap_sequence(&self.sequence, LINE_WIDTH)
    }
}

/// Output of a full layout pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledScaffolds {
    pub scaffolds: Vec<Scaffold>,
    /// Sum of all negative gap sizes (zero or negative)
    pub negative_gap_total: i64,
}

/// Streaming scaffold builder over a contig content index
pub struct ScaffoldAssembler<'a> {
    contigs: &'a LengthIndex,
    current_id: String,
    buffer: Vec<u8>,
    negative_gap_total: i64,
}

impl<'a> ScaffoldAssembler<'a> {
    pub fn new(contigs: &'a LengthIndex) -> Self {
        Self {
            contigs,
            current_id: String::new(),
            buffer: Vec::new(),
            negative_gap_total: 0,
        }
    }

    /// Apply one directive. Returns the previous scaffold once a new
    /// supercontig id begins.
    pub fn push(&mut self, directive: ScaffoldDirective) -> Option<Scaffold> {
        match directive {
            ScaffoldDirective::Supercontig(id) => {
                if id.eq_ignore_ascii_case(&self.current_id) {
                    return None;
                }
                let done = self.take_scaffold();
                self.current_id = id;
                done
            }
            ScaffoldDirective::ContigRef(id) => {
                // Unknown contigs contribute nothing.
                if let Some(content) = self.contigs.content(&id) {
                    self.buffer.extend_from_slice(content.as_bytes());
                }
                None
            }
            ScaffoldDirective::Gap(size) if size < 0 => {
                self.negative_gap_total += size;
                let overlap = size.unsigned_abs() as usize;
                // An overlap longer than the scaffold leaves it untouched.
                if overlap <= self.buffer.len() {
                    self.buffer.truncate(self.buffer.len() - overlap);
                } else {
                    debug!(
                        "Gap {} exceeds scaffold {} length {}, not trimming",
                        size,
                        self.current_id,
                        self.buffer.len()
                    );
                }
                None
            }
            ScaffoldDirective::Gap(size) => {
                let filler = size as usize;
                self.buffer.resize(self.buffer.len() + filler, GAP_CHAR);
                None
            }
        }
    }

    /// Flush the last scaffold and report the negative gap total
    pub fn finish(mut self) -> (Option<Scaffold>, i64) {
        let last = self.take_scaffold();
        (last, self.negative_gap_total)
    }

    pub fn negative_gap_total(&self) -> i64 {
        self.negative_gap_total
    }

    fn take_scaffold(&mut self) -> Option<Scaffold> {
        if self.buffer.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buffer);
        let sequence = String::from_utf8_lossy(&bytes).trim().to_string();
        Some(Scaffold {
            id: self.current_id.clone(),
            sequence,
        })
    }
}

/// Run a whole directive stream through a fresh assembler
pub fn assemble<I>(contigs: &LengthIndex, directives: I) -> AssembledScaffolds
where
    I: IntoIterator<Item = ScaffoldDirective>,
{
    let mut assembler = ScaffoldAssembler::new(contigs);
    let mut scaffolds = Vec::new();
    for directive in directives {
        if let Some(scaffold) = assembler.push(directive) {
            scaffolds.push(scaffold);
        }
    }
    let (last, negative_gap_total) = assembler.finish();
    scaffolds.extend(last);
    AssembledScaffolds {
        scaffolds,
        negative_gap_total,
    }
}

/// Assemble scaffolds from a layout reader, failing only on I/O errors
pub fn assemble_from_layout<R: BufRead>(
    contigs: &LengthIndex,
    layout: R,
    layout_path: &std::path::Path,
) -> Result<AssembledScaffolds> {
    let directives = read_layout(layout).map_err(|e| StatsError::io(layout_path, e))?;
    Ok(assemble(contigs, directives))
}
