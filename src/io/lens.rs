use std::io::BufRead;
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::io::open_input;
use crate::stats::index::LengthIndex;

/// Parse a whitespace-separated `id length` table. Blank lines are skipped.
pub fn parse_lengths<R: BufRead>(reader: R, path: &Path) -> Result<LengthIndex> {
    let mut index = LengthIndex::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StatsError::io(path, e))?;
        let mut fields = line.split_whitespace();
        let Some(id) = fields.next() else {
            continue;
        };
        let parse_error = |message: String| StatsError::Parse {
            path: path.to_path_buf(),
            line: line_no + 1,
            message,
        };
        let length = fields
            .next()
            .ok_or_else(|| parse_error(format!("missing length for {}", id)))?
            .parse::<u64>()
            .map_err(|e| parse_error(format!("invalid length for {}: {}", id, e)))?;
        index.insert_length(id, length);
    }

    Ok(index)
}

pub fn read_lengths(path: &Path) -> Result<LengthIndex> {
    parse_lengths(open_input(path)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        let input = "ctg1\t2500\n\n  ctg2   300 ignored\n";
        let index = parse_lengths(input.as_bytes(), Path::new("x.lens")).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.length("ctg1"), Some(2500));
        assert_eq!(index.length("ctg2"), Some(300));
    }

    #[test]
    fn test_bad_length_reports_line() {
        let input = "ctg1 10\nctg2 ten\n";
        let err = parse_lengths(input.as_bytes(), Path::new("x.lens")).unwrap_err();

        match err {
            StatsError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }
}
