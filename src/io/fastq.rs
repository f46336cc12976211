// src/io/fastq.rs
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::io::fasta::SequenceSize;
use crate::io::open_input;
use crate::stats::index::LengthIndex;

#[derive(Debug, Clone)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

impl FastqRecord {
    /// Read id: first token of the header without the leading `@`
    pub fn id(&self) -> &str {
        first_token(&self.header)
    }

    /// Id repeated on the `+` line, empty when absent
    pub fn plus_id(&self) -> &str {
        first_token(&self.plus)
    }
}

fn first_token(line: &str) -> &str {
    line.get(1..)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_default()
}

/// Stream FASTQ records four lines at a time
pub fn stream_fastq_records<R: BufRead>(reader: R) -> FastqStreamParser<io::Lines<R>> {
    FastqStreamParser { lines: reader.lines() }
}

/// Iterator adaptor to handle streaming FASTQ parsing
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
}

impl<I> FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> io::Result<String> {
        match self.lines.next() {
            Some(line) => line,
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated FASTQ record",
            )),
        }
    }

    fn finish_record(&mut self, header: String) -> io::Result<FastqRecord> {
        let sequence = self.next_line()?;
        let plus = self.next_line()?;
        let quality = self.next_line()?;
        Ok(FastqRecord {
            header,
            sequence,
            plus,
            quality,
        })
    }
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<FastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };

        Some(self.finish_record(header))
    }
}

/// Size every FASTQ record, checking that the `+` line id matches when given
pub fn size_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<SequenceSize>> {
    let mut sizes = Vec::new();
    for record in stream_fastq_records(reader) {
        let record = record.map_err(|e| StatsError::io(path, e))?;
        let plus_id = record.plus_id();
        if !plus_id.is_empty() && plus_id != record.id() {
            return Err(StatsError::QualityIdMismatch {
                id: record.id().to_string(),
                qual_id: plus_id.to_string(),
            });
        }
        sizes.push(SequenceSize {
            name: record.id().to_string(),
            length: record.sequence.trim_end().len() as u64,
        });
    }
    Ok(sizes)
}

/// Read FASTQ lengths into an index keyed by read id
pub fn read_index(path: &Path) -> Result<LengthIndex> {
    let reader = open_input(path)?;
    let mut index = LengthIndex::new();
    for size in size_records(reader, path)? {
        index.insert_length(size.name, size.length);
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_fastq_records() {
        let input = "@r1 extra\nACGT\n+\nIIII\n@r2\nAC\n+r2\nII\n";
        let records: Vec<FastqRecord> = stream_fastq_records(input.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "r1");
        assert_eq!(records[0].plus_id(), "");
        assert_eq!(records[1].plus_id(), "r2");
    }

    #[test]
    fn test_truncated_record_is_an_error() {
        let input = "@r1\nACGT\n+\n";
        let mut records = stream_fastq_records(input.as_bytes());
        let err = records.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_size_records() {
        let input = "@r1\nACGTA\n+\nIIIII\n@r2\nAC\n+r2\nII\n";
        let sizes = size_records(input.as_bytes(), Path::new("reads.fq")).unwrap();

        assert_eq!(sizes[0], SequenceSize { name: "r1".into(), length: 5 });
        assert_eq!(sizes[1], SequenceSize { name: "r2".into(), length: 2 });
    }

    #[test]
    fn test_mismatched_quality_id() {
        let input = "@r1\nACGT\n+r9\nIIII\n";
        let err = size_records(input.as_bytes(), Path::new("reads.fq")).unwrap_err();
        assert!(matches!(err, StatsError::QualityIdMismatch { .. }));
    }
}
