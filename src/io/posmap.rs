//! Counting reads placed on assembled sequences.
//!
//! A posmap file has one whitespace-separated line per read placement. The
//! sequence id sits in the second column, or the third for the NB layout.

use std::io::BufRead;
use std::path::Path;

use crate::error::{Result, StatsError};
use crate::io::open_input;
use crate::stats::index::LengthIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosmapLayout {
    #[default]
    Standard,
    Nb,
}

impl PosmapLayout {
    fn id_column(self) -> usize {
        match self {
            PosmapLayout::Standard => 1,
            PosmapLayout::Nb => 2,
        }
    }
}

/// Count placements on sequences present in `index`. Lines too short to
/// carry an id are skipped.
pub fn count_placed_reads<R: BufRead>(
    reader: R,
    index: &LengthIndex,
    layout: PosmapLayout,
) -> std::io::Result<u64> {
    let column = layout.id_column();
    let mut placed = 0u64;
    for line in reader.lines() {
        let line = line?;
        if let Some(id) = line.split_whitespace().nth(column) {
            if index.contains(id) {
                placed += 1;
            }
        }
    }
    Ok(placed)
}

pub fn count_placed_reads_in(path: &Path, index: &LengthIndex, layout: PosmapLayout) -> Result<u64> {
    let reader = open_input(path)?;
    count_placed_reads(reader, index, layout).map_err(|e| StatsError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LengthIndex {
        [("ctg1".to_string(), 5000), ("ctg2".to_string(), 3000)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_count_standard_layout() {
        let input = "r1 ctg1 10 f\nr2 ctg1 50 r\nr3 ctg9 1 f\nr4\nr5 ctg2 7 f\n";
        let placed = count_placed_reads(input.as_bytes(), &index(), PosmapLayout::Standard).unwrap();
        assert_eq!(placed, 3);
    }

    #[test]
    fn test_count_nb_layout() {
        let input = "r1 lib ctg2 10\nr2 ctg1\nr3 lib ctg1 4\n";
        let placed = count_placed_reads(input.as_bytes(), &index(), PosmapLayout::Nb).unwrap();
        assert_eq!(placed, 2);
    }
}
