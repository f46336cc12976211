use clap::{Parser, Subcommand, ValueEnum};

use contig_stats::report::ReportStyle;
use contig_stats::stats::distribution::DEFAULT_MIN_LENGTH;

#[derive(Parser, Debug)]
#[command(name = "contig-stats", version, about = "Assembly contiguity statistics and scaffold reconstruction", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Key/value report (N10-N75, E-size)
    Legacy,
    /// CSV row per assembly with a header for the first
    Tabular,
    /// JSON object per assembly
    Json,
}

impl From<FormatArg> for ReportStyle {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Legacy => ReportStyle::Legacy,
            FormatArg::Tabular => ReportStyle::Tabular,
            FormatArg::Json => ReportStyle::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Contiguity statistics for one or more assemblies
    Stats {
        /// Assemblies; each may be a comma-separated list of FASTA(.gz) or .lens files
        #[arg(required = true)]
        assemblies: Vec<String>,

        /// Ignore sequences of this length or shorter
        #[arg(long = "min", default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: u64,

        /// Reference genome size; 0 uses the total assembled length
        #[arg(short, long, default_value_t = 0)]
        genome_size: u64,

        /// Fixed contig-at milestones at 1, 2, 5 and 10 Mb
        #[arg(short, long)]
        baylor: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Tabular)]
        format: FormatArg,

        /// Row title when a single assembly is given
        #[arg(long)]
        title: Option<String>,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Rebuild scaffolds from contigs and a layout file
    Scaffold {
        /// Contig FASTA(.gz) file
        #[arg(short, long)]
        contigs: String,

        /// Layout with supercontig / contig / gap lines
        #[arg(short, long)]
        layout: String,

        /// Output FASTA(.gz) file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the length of every record in FASTA or FASTQ files
    Size {
        /// Input files
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Do not count N, n or - in FASTA records
        #[arg(long)]
        ungapped: bool,
    },

    /// Count read placements that land on assembled sequences
    CountReads {
        /// Assembly (comma-separated files allowed)
        #[arg(short, long)]
        assembly: String,

        /// Read placement (posmap) file
        #[arg(short, long)]
        posmap: String,

        /// Sequence id is in the third column instead of the second
        #[arg(long)]
        nb: bool,
    },
}
