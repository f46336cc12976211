// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Stdout, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Result, StatsError};
use crate::io::open_input;
use crate::stats::index::LengthIndex;

/// Residues per line in written FASTA
pub const LINE_WIDTH: usize = 60;

/// Length of a FASTA record, optionally ignoring gap characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSize {
    pub name: String,
    pub length: u64,
}

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
    Stdout(BufWriter<Stdout>),
}

impl FastaWriter {
    /// Create a writer for `path`, gzip-compressed when it ends in `.gz`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| StatsError::io(path, e))?;
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn stdout() -> Self {
        FastaWriter::Stdout(BufWriter::new(io::stdout()))
    }

    fn inner(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
            FastaWriter::Stdout(writer) => writer,
        }
    }

    /// Write one record with the sequence wrapped at [`LINE_WIDTH`]
    pub fn write_record(&mut self, header: &str, sequence: &str) -> io::Result<()> {
        let writer = self.inner();
        writeln!(writer, ">{}", header)?;
        writeln!(writer, "{}", wrap_sequence(sequence, LINE_WIDTH))?;
        Ok(())
    }

    /// Flush buffered output and finish any gzip stream
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
            FastaWriter::Stdout(mut writer) => writer.flush(),
        }
    }
}

/// Break a sequence into lines of at most `width` characters
pub fn wrap_sequence(sequence: &str, width: usize) -> String {
    if width == 0 || sequence.len() <= width {
        return sequence.to_string();
    }
    let mut out = String::with_capacity(sequence.len() + sequence.len() / width);
    let mut line_len = 0;
    for c in sequence.chars() {
        if line_len == width {
            out.push('\n');
            line_len = 0;
        }
        out.push(c);
        line_len += 1;
    }
    out
}

/// Record identifier: first whitespace-delimited token of the header line
fn record_id(header_line: &str) -> String {
    header_line[1..]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Drop alignment padding and surrounding whitespace from a record body
fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != '-' && c != '.')
        .collect::<String>()
        .trim()
        .to_string()
}

fn flush_record(id: Option<&str>, current: &mut String, index: &mut LengthIndex) {
    let sequence = clean_sequence(current);
    current.clear();
    if let Some(id) = id {
        if !sequence.is_empty() {
            index.insert_sequence(id, sequence);
        }
    }
}

/// Read FASTA records into a length index. Empty records are not indexed.
pub fn read_index_from<R: BufRead>(reader: R, keep_content: bool) -> io::Result<LengthIndex> {
    let mut index = if keep_content {
        LengthIndex::with_content()
    } else {
        LengthIndex::new()
    };
    let mut id: Option<String> = None;
    let mut current = String::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            flush_record(id.as_deref(), &mut current, &mut index);
            id = Some(record_id(&line));
        } else if id.is_some() {
            current.push_str(line.trim_end());
        }
    }
    flush_record(id.as_deref(), &mut current, &mut index);

    Ok(index)
}

pub fn read_index(path: &Path, keep_content: bool) -> Result<LengthIndex> {
    let reader = open_input(path)?;
    read_index_from(reader, keep_content).map_err(|e| StatsError::io(path, e))
}

/// Size every FASTA record, naming each by its full header text
pub fn size_records<R: BufRead>(reader: R, ungapped: bool) -> io::Result<Vec<SequenceSize>> {
    let mut sizes = Vec::new();
    let mut name: Option<String> = None;
    let mut length = 0u64;
    let mut has_bases = false;

    for line in reader.lines() {
        let line = line?;
        if let Some(header) = line.strip_prefix('>') {
            if has_bases {
                if let Some(name) = name.take() {
                    sizes.push(SequenceSize { name, length });
                }
            }
            name = Some(header.to_string());
            length = 0;
            has_bases = false;
        } else {
            let bases = line.trim_end();
            has_bases |= !bases.is_empty();
            length += if ungapped {
                bases.bytes().filter(|&b| !matches!(b, b'N' | b'n' | b'-')).count() as u64
            } else {
                bases.len() as u64
            };
        }
    }
    if has_bases {
        sizes.push(SequenceSize {
            name: name.unwrap_or_default(),
            length,
        });
    }

    Ok(sizes)
}
