mod cli;
mod cli_main;

use clap::Parser;
use cli_main::{Cli, Commands};
use rayon::ThreadPoolBuilder;
use tracing::{error, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit status for internal consistency failures
const EXIT_INTERNAL: i32 = 70;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let outcome = match cli.command {
        Commands::Stats {
            assemblies,
            min_length,
            genome_size,
            baylor,
            format,
            title,
            threads,
        } => {
            if let Err(e) = ThreadPoolBuilder::new().num_threads(threads).build_global() {
                warn!("Could not size thread pool: {}", e);
            }
            cli::stats::run(&assemblies, min_length, genome_size, baylor, format.into(), title.as_deref())
        }

        Commands::Scaffold { contigs, layout, output } => {
            cli::scaffold::run(&contigs, &layout, output.as_deref())
        }

        Commands::Size { inputs, ungapped } => cli::size::run(&inputs, ungapped),

        Commands::CountReads { assembly, posmap, nb } => cli::size::count_reads(&assembly, &posmap, nb),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        std::process::exit(if e.is_internal() { EXIT_INTERNAL } else { 1 });
    }
}
