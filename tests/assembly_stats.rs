use contig_stats::batch::process_assembly;
use contig_stats::io::load_assembly;
use contig_stats::report::{ReportFormatter, ReportStyle};
use contig_stats::stats::{compute, MilestonePolicy, StatsConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn fasta_with_lengths(lengths: &[usize]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".fasta").tempfile().unwrap();
    for (i, len) in lengths.iter().enumerate() {
        writeln!(file, ">contig_{} len={}", i + 1, len).unwrap();
        let seq = "ACGT".repeat(len / 4 + 1);
        for chunk in seq.as_bytes()[..*len].chunks(60) {
            file.write_all(chunk).unwrap();
            writeln!(file).unwrap();
        }
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_fasta_to_tabular_report() {
    let file = fasta_with_lengths(&[1500, 2000, 2500, 3000, 6000]);
    let path = file.path().to_str().unwrap();

    let report = process_assembly(path, Some("asm"), &StatsConfig::default()).unwrap();
    let result = &report.result;

    // 1500 and 2000 fall at or below the default floor.
    assert_eq!(result.count, 3);
    assert_eq!(result.reference_total, 11_500);
    assert_eq!(result.min, Some(2500));
    assert_eq!(result.max, Some(6000));
    assert_eq!(result.median, Some(3000.0));
    assert_eq!(result.nx(50).map(|n| (n.length, n.count)), Some((6000, 1)));

    let text = ReportFormatter::new(ReportStyle::Tabular)
        .render(&report.title, result, true)
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "Assembly,Unit Number,Unit Total BP,Number Units > 2000,Total BP in Units > 2000,Min,Max,Average,Median"
    );
    assert_eq!(lines[1], "asm,3,11500,3,11500,2500,6000,3833.33,3000");
}

#[test]
fn test_genome_size_with_baylor_milestones() {
    let file = fasta_with_lengths(&[600_000, 500_000, 400_000, 300_000]);
    let index = load_assembly(file.path().to_str().unwrap(), false).unwrap();
    let config = StatsConfig {
        min_length: 2000,
        genome_size: 4_000_000,
        milestones: MilestonePolicy::Baylor,
    };

    let result = compute(&index, &config).unwrap();

    assert_eq!(result.reference_total, 4_000_000);
    assert_eq!(result.e_size, Some(860_000_000_000.0 / 4_000_000.0));
    let bound: Vec<(u64, u64)> = result
        .bound_milestones()
        .map(|m| (m.goal, m.hit.unwrap().count))
        .collect();
    assert_eq!(bound, vec![(1_000_000, 2)]);
    // 1.8 Mb of a 4 Mb reference never reaches half.
    assert_eq!(result.nx(25).map(|n| n.count), Some(2));
    assert!(result.nx(50).is_none());
}

#[test]
fn test_gzip_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = tempfile::Builder::new().suffix(".fa.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    writeln!(encoder, ">a").unwrap();
    writeln!(encoder, "{}", "A".repeat(2500)).unwrap();
    writeln!(encoder, ">b").unwrap();
    writeln!(encoder, "{}", "C".repeat(4100)).unwrap();
    encoder.finish().unwrap();

    let index = load_assembly(file.path().to_str().unwrap(), false).unwrap();
    assert_eq!(index.length("a"), Some(2500));
    assert_eq!(index.length("b"), Some(4100));
}
